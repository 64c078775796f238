//! The arena proper: chunk chain, bump allocation, reset and teardown.

use crate::chunk::Chunk;
use crate::config::ArenaConfig;
use crate::stats::ArenaStats;
use arenakit_common::limits::TEXT_TERMINATOR_BYTES;
use arenakit_common::{Error, Result};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

/// Handle to a region returned by [`Arena::allocate`].
///
/// A handle is a plain value: it does not borrow the arena. It only resolves
/// against the arena that issued it and only until that arena is reset.
/// Using it with a different arena is a caller error that is not detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Allocation {
    chunk: usize,
    offset: usize,
    size: usize,
    generation: u64,
}

impl Allocation {
    /// Index of the chunk holding the region.
    #[inline]
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    /// Offset of the region inside its chunk.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Size of the region in bytes. Always at least one.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reset generation the handle was issued in.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether two regions share any byte. Regions in different chunks never
    /// overlap.
    pub fn overlaps(&self, other: &Allocation) -> bool {
        self.chunk == other.chunk
            && self.offset < other.offset + other.size
            && other.offset < self.offset + self.size
    }
}

/// Observable arena state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaState {
    /// No chunk has been acquired yet.
    Empty,
    /// At least one chunk exists. Reset keeps the arena here.
    Populated,
}

#[derive(Clone, Copy, Debug, Default)]
struct Counters {
    in_use: usize,
    allocations: usize,
    total_allocations: usize,
    resets: usize,
    peak_used: usize,
}

/// Chunked bump allocator.
///
/// Chunks are kept in creation order and addressed by index. `current` is
/// `None` exactly when there are no chunks; otherwise it indexes the chunk
/// allocation is first attempted against. `current` only moves when a chunk
/// is appended or when the current chunk is exhausted, so space left in it
/// stays reachable while later chunks serve larger requests. Chunks before
/// `current` become available again after [`Arena::reset`].
#[derive(Debug)]
pub struct Arena {
    config: ArenaConfig,
    default_chunk_size: usize,
    chunks: SmallVec<[Chunk; 2]>,
    current: Option<usize>,
    generation: u64,
    counters: Counters,
}

impl Default for Arena {
    fn default() -> Self {
        Arena::with_config(ArenaConfig::default())
    }
}

impl Arena {
    /// Set up an arena whose chunks are at least `chunk_size` bytes, raised to
    /// the default floor. No chunk is acquired until the first allocation.
    pub fn new(chunk_size: usize) -> Arena {
        Arena::with_config(ArenaConfig::new(chunk_size))
    }

    pub fn with_config(config: ArenaConfig) -> Arena {
        let default_chunk_size = config.effective_chunk_size();
        Arena {
            config,
            default_chunk_size,
            chunks: SmallVec::new(),
            current: None,
            generation: 0,
            counters: Counters::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Capacity given to new chunks unless a request needs more.
    #[inline]
    pub fn default_chunk_size(&self) -> usize {
        self.default_chunk_size
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn state(&self) -> ArenaState {
        if self.chunks.is_empty() {
            ArenaState::Empty
        } else {
            ArenaState::Populated
        }
    }

    /// Free bytes left in the chunk currently receiving allocations.
    pub fn remaining_in_current(&self) -> usize {
        self.current
            .map(|index| self.chunks[index].remaining())
            .unwrap_or(0)
    }

    /// Allocate `size` bytes.
    ///
    /// Starting at the current chunk, the first chunk whose *remaining* space
    /// fits the request is bumped. If none fits, a chunk of
    /// `max(default_chunk_size, size)` bytes is appended and becomes current.
    /// Bumping a later chunk leaves `current` alone unless the current chunk
    /// has no space left.
    ///
    /// Fresh chunks are zero-filled; memory reused after a reset keeps
    /// whatever was written before.
    pub fn allocate(&mut self, size: usize) -> Result<Allocation> {
        if size == 0 {
            return Err(Error::ZeroSizeAllocation);
        }

        let chunk = match self.find_chunk_with_room(size) {
            Some(index) => index,
            None => {
                let index = self.push_chunk(size)?;
                self.current = Some(index);
                index
            }
        };
        let offset = self.chunks[chunk].bump(size);
        self.skip_exhausted_chunks();

        let counters = &mut self.counters;
        counters.in_use += size;
        counters.allocations += 1;
        counters.total_allocations += 1;
        counters.peak_used = counters.peak_used.max(counters.in_use);

        trace!(chunk, offset, size, "arena allocate");
        Ok(Allocation {
            chunk,
            offset,
            size,
            generation: self.generation,
        })
    }

    /// Allocate room for one `T`. Zero-sized types are rejected.
    pub fn allocate_for<T>(&mut self) -> Result<Allocation> {
        self.allocate(std::mem::size_of::<T>())
    }

    /// Allocate room for `count` values of `T`.
    pub fn allocate_array<T>(&mut self, count: usize) -> Result<Allocation> {
        let elem_size = std::mem::size_of::<T>();
        let size = count
            .checked_mul(elem_size)
            .ok_or(Error::SizeOverflow { count, elem_size })?;
        self.allocate(size)
    }

    /// Allocate a region and copy `bytes` into it.
    pub fn allocate_copy(&mut self, bytes: &[u8]) -> Result<Allocation> {
        let allocation = self.allocate(bytes.len())?;
        self.region_mut(&allocation).copy_from_slice(bytes);
        Ok(allocation)
    }

    /// Copy `text` into the arena followed by a NUL terminator.
    ///
    /// The returned region is `text.len() + 1` bytes; the last byte is the
    /// reserved terminator slot.
    pub fn allocate_text(&mut self, text: &[u8]) -> Result<Allocation> {
        let size = text
            .len()
            .checked_add(TEXT_TERMINATOR_BYTES)
            .ok_or(Error::SizeOverflow {
                count: text.len(),
                elem_size: 1,
            })?;
        let allocation = self.allocate(size)?;
        let region = self.region_mut(&allocation);
        let (body, terminator) = region.split_at_mut(text.len());
        body.copy_from_slice(text);
        terminator.fill(0);
        Ok(allocation)
    }

    /// Bytes of a live allocation, or `None` if the handle is stale.
    pub fn get(&self, allocation: &Allocation) -> Option<&[u8]> {
        if allocation.generation != self.generation {
            return None;
        }
        self.chunks
            .get(allocation.chunk)?
            .get(allocation.offset, allocation.size)
    }

    pub fn get_mut(&mut self, allocation: &Allocation) -> Option<&mut [u8]> {
        if allocation.generation != self.generation {
            return None;
        }
        self.chunks
            .get_mut(allocation.chunk)?
            .get_mut(allocation.offset, allocation.size)
    }

    /// Rewind every chunk so all of its memory can be handed out again.
    ///
    /// Chunks keep their buffers and capacities, and the chain keeps its
    /// order. Every handle issued so far becomes stale. Does nothing on an
    /// empty arena.
    pub fn reset(&mut self) {
        if self.chunks.is_empty() {
            return;
        }
        for chunk in &mut self.chunks {
            chunk.rewind();
        }
        self.current = Some(0);
        self.generation += 1;
        self.counters.in_use = 0;
        self.counters.allocations = 0;
        self.counters.resets += 1;
        debug!(chunks = self.chunks.len(), "arena reset");
    }

    /// Release every chunk and return how many buffers were released.
    ///
    /// Dropping the arena releases the same memory; this form reports the
    /// count.
    pub fn teardown(self) -> usize {
        let released = self.chunks.len();
        debug!(released, "arena teardown");
        released
    }

    pub fn stats(&self) -> ArenaStats {
        let capacity_bytes: usize = self.chunks.iter().map(Chunk::capacity).sum();
        let used_bytes: usize = self.chunks.iter().map(Chunk::used).sum();
        ArenaStats {
            chunk_count: self.chunks.len(),
            capacity_bytes,
            used_bytes,
            remaining_bytes: capacity_bytes - used_bytes,
            allocations: self.counters.allocations,
            total_allocations: self.counters.total_allocations,
            resets: self.counters.resets,
            peak_used_bytes: self.counters.peak_used,
        }
    }

    /// Capacities of the chunks in chain order.
    pub fn chunk_capacities(&self) -> impl Iterator<Item = usize> + '_ {
        self.chunks.iter().map(Chunk::capacity)
    }

    /// Move `current` past chunks with no space left, stopping at the tail.
    fn skip_exhausted_chunks(&mut self) {
        if let Some(mut index) = self.current {
            while self.chunks[index].remaining() == 0 && index + 1 < self.chunks.len() {
                index += 1;
            }
            self.current = Some(index);
        }
    }

    fn find_chunk_with_room(&self, size: usize) -> Option<usize> {
        let start = self.current?;
        (start..self.chunks.len()).find(|&index| self.chunks[index].remaining() >= size)
    }

    /// Append a chunk able to hold `size` bytes and return its index.
    fn push_chunk(&mut self, size: usize) -> Result<usize> {
        let capacity = self.default_chunk_size.max(size);

        if let Some(budget) = self.config.max_total_bytes {
            let committed: usize = self.chunks.iter().map(Chunk::capacity).sum();
            if committed.saturating_add(capacity) > budget {
                warn!(capacity, committed, budget, "arena byte budget exhausted");
                return Err(Error::OutOfMemory {
                    requested: capacity,
                });
            }
        }

        let chunk = Chunk::try_new(capacity)
            .inspect_err(|_| warn!(capacity, "failed to acquire arena chunk"))?;
        let index = self.chunks.len();
        self.chunks.push(chunk);
        debug!(index, capacity, "acquired arena chunk");
        Ok(index)
    }

    /// Region of an allocation issued in the current generation.
    fn region_mut(&mut self, allocation: &Allocation) -> &mut [u8] {
        let start = allocation.offset;
        let end = start + allocation.size;
        &mut self.chunks[allocation.chunk].buffer_mut()[start..end]
    }
}
