use arenakit_common::{Error, Result};
use std::fmt;

/// One fixed-capacity backing buffer.
///
/// `buffer.len()` is the capacity and never changes after creation.
/// Bytes `[0, used)` are handed out; `used <= capacity` always holds.
pub(crate) struct Chunk {
    buffer: Vec<u8>,
    used: usize,
}

impl Chunk {
    /// Acquire a zero-filled chunk of exactly `capacity` bytes.
    pub(crate) fn try_new(capacity: usize) -> Result<Chunk> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory {
                requested: capacity,
            })?;
        buffer.resize(capacity, 0);
        Ok(Chunk { buffer, used: 0 })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub(crate) fn used(&self) -> usize {
        self.used
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    /// Advance the cursor by `size` and return the offset it started at.
    /// The caller must have checked `remaining() >= size`.
    #[inline]
    pub(crate) fn bump(&mut self, size: usize) -> usize {
        debug_assert!(size <= self.remaining());
        let offset = self.used;
        self.used += size;
        offset
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[inline]
    pub(crate) fn rewind(&mut self) {
        self.used = 0;
    }

    /// Bytes `[offset, offset + size)`, if they lie within the handed-out
    /// part of the chunk.
    pub(crate) fn get(&self, offset: usize, size: usize) -> Option<&[u8]> {
        let end = offset.checked_add(size)?;
        if end > self.used {
            return None;
        }
        self.buffer.get(offset..end)
    }

    pub(crate) fn get_mut(&mut self, offset: usize, size: usize) -> Option<&mut [u8]> {
        let end = offset.checked_add(size)?;
        if end > self.used {
            return None;
        }
        self.buffer.get_mut(offset..end)
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("capacity", &self.capacity())
            .field("used", &self.used)
            .finish()
    }
}
