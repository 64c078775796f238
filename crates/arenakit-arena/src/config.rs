//! Arena construction parameters.

use arenakit_common::limits::{DEBUG_MIN_CHUNK_SIZE, DEFAULT_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE};
use serde::{Deserialize, Serialize};

/// How an [`Arena`](crate::Arena) sizes and bounds its chunks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Requested size of newly created chunks, in bytes.
    pub chunk_size: usize,
    /// Floor applied to `chunk_size`.
    pub min_chunk_size: usize,
    /// Upper bound on the summed capacity of all chunks. Acquiring a chunk
    /// past this bound fails with `Error::OutOfMemory`.
    pub max_total_bytes: Option<usize>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            max_total_bytes: None,
        }
    }
}

impl ArenaConfig {
    /// Request `chunk_size` byte chunks with the default 1 MiB floor.
    pub fn new(chunk_size: usize) -> Self {
        ArenaConfig {
            chunk_size,
            ..ArenaConfig::default()
        }
    }

    /// Request `chunk_size` byte chunks with no practical floor.
    ///
    /// Meant for tests that need to cross chunk boundaries with small
    /// allocations.
    pub fn debug(chunk_size: usize) -> Self {
        ArenaConfig {
            chunk_size,
            min_chunk_size: DEBUG_MIN_CHUNK_SIZE,
            max_total_bytes: None,
        }
    }

    pub fn with_min_chunk_size(mut self, min_chunk_size: usize) -> Self {
        self.min_chunk_size = min_chunk_size;
        self
    }

    pub fn with_max_total_bytes(mut self, max_total_bytes: usize) -> Self {
        self.max_total_bytes = Some(max_total_bytes);
        self
    }

    /// The chunk size the arena will actually use: `chunk_size` raised to
    /// the floor, and never below one byte.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size
            .max(self.min_chunk_size)
            .max(DEBUG_MIN_CHUNK_SIZE)
    }
}
