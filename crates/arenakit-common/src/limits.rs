//! Centralized size defaults for the arena.
//!
//! Chunk sizes are construction parameters (see `ArenaConfig`); the values
//! here are only the defaults and floors those parameters start from.

// =============================================================================
// Chunk Sizes
// =============================================================================

/// Smallest chunk the arena creates unless configured otherwise (1 MiB).
///
/// Requested chunk sizes below this are raised to it so that the cost of
/// acquiring a chunk from the system allocator is spread over many
/// allocations.
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 1024 * 1024;

/// Chunk size used by `Arena::default()`.
pub const DEFAULT_CHUNK_SIZE: usize = DEFAULT_MIN_CHUNK_SIZE;

/// Floor used by debug configurations.
///
/// Lets tests build arenas with chunks of a few bytes so that chunk
/// boundaries are hit quickly.
pub const DEBUG_MIN_CHUNK_SIZE: usize = 1;

// =============================================================================
// Text
// =============================================================================

/// Bytes reserved after arena-backed text for its NUL terminator.
pub const TEXT_TERMINATOR_BYTES: usize = 1;
