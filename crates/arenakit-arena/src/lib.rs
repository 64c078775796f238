//! Chunked bump arena.
//!
//! The arena hands out byte regions by advancing a cursor inside a chunk and
//! reclaims them only in bulk:
//! - `Arena::allocate` bumps the first chunk (from the current one onward)
//!   with enough remaining space, appending a new chunk when none has room
//! - `Arena::reset` rewinds every chunk without releasing memory
//! - `Arena::teardown` (or drop) releases every chunk
//!
//! Regions are addressed through `Allocation` handles (chunk index, offset,
//! size) rather than raw pointers. Handles issued before a reset are stale and
//! no longer resolve.
//!
//! The arena is not synchronised. Use one arena per thread or task.

pub mod arena;
pub use arena::{Allocation, Arena, ArenaState};

pub mod config;
pub use config::ArenaConfig;

mod chunk;

pub mod stats;
pub use stats::ArenaStats;

pub use arenakit_common::{Error, ErrorKind, Result};
