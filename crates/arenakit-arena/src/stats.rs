use serde::Serialize;

/// Snapshot of an arena's memory accounting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ArenaStats {
    pub chunk_count: usize,
    /// Sum of all chunk capacities.
    pub capacity_bytes: usize,
    /// Bytes handed out since the last reset.
    pub used_bytes: usize,
    /// `capacity_bytes - used_bytes`, including space stranded in chunks
    /// the allocation cursor has moved past.
    pub remaining_bytes: usize,
    /// Allocations since the last reset.
    pub allocations: usize,
    /// Allocations over the arena's lifetime.
    pub total_allocations: usize,
    pub resets: usize,
    /// Largest `used_bytes` observed.
    pub peak_used_bytes: usize,
}

impl ArenaStats {
    /// Fraction of chunk capacity currently handed out, in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        if self.capacity_bytes == 0 {
            0.0
        } else {
            self.used_bytes as f64 / self.capacity_bytes as f64
        }
    }
}
