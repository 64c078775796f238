//! Borrowed string views.
//!
//! A `StrView` is a window over bytes owned elsewhere (an arena chunk or a
//! caller buffer). It tracks a logical `size` separately from the physical
//! `capacity` available behind it. Operations never allocate; they return
//! new views over the same memory.

pub mod view;
pub use view::{Comparison, StrView, equals};

pub mod whitespace;
pub use whitespace::is_whitespace;
