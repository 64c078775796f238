//! Common types for the arenakit crates.
//!
//! This crate provides the pieces shared by the arena and the string views:
//! - The error type (`Error`, `ErrorKind`, `Result`)
//! - Chunk size defaults and floors

// Error reporting for allocation and view operations
pub mod error;
pub use error::{Error, ErrorKind, Result};

// Centralized size defaults
pub mod limits;
