use byteorder::{ByteOrder, LittleEndian};

use super::BuildError;

/// Width of one stored `int`.
pub const INT_SIZE: usize = 4;

/// Bump arena backing every allocation made during one build.
///
/// Memory handed out is always zeroed. Nothing is freed piecemeal: the whole
/// arena goes away when the heap is dropped, so every allocation is released
/// on every return path of its owner.
pub struct Heap {
    memory: Vec<u8>,
    limit: usize,
}

impl Heap {
    pub fn new(limit: usize) -> Self {
        Self { memory: Vec::new(), limit }
    }

    /// Reserves `size` zeroed bytes and returns their address.
    pub fn alloc(&mut self, size: usize) -> Result<usize, BuildError> {
        let address = self.memory.len();
        let end = address
            .checked_add(size)
            .ok_or(BuildError::Allocation { requested: size })?;
        if end > self.limit {
            log::warn!("allocation of {size} bytes exceeds heap limit of {} bytes", self.limit);
            return Err(BuildError::Allocation { requested: size });
        }
        self.memory
            .try_reserve_exact(size)
            .map_err(|_| BuildError::Allocation { requested: size })?;
        self.memory.resize(end, 0);
        log::trace!("alloc {size} bytes at {address:#x}");
        Ok(address)
    }

    /// Reserves `count` zeroed elements of `elem_size` bytes each.
    pub fn calloc(&mut self, count: usize, elem_size: usize) -> Result<usize, BuildError> {
        let size = count
            .checked_mul(elem_size)
            .ok_or(BuildError::Allocation { requested: usize::MAX })?;
        self.alloc(size)
    }

    pub fn poke_i32(&mut self, address: usize, value: i32) {
        LittleEndian::write_i32(&mut self.memory[address..address + INT_SIZE], value);
    }

    pub fn peek_i32(&self, address: usize) -> i32 {
        LittleEndian::read_i32(&self.memory[address..address + INT_SIZE])
    }

    pub fn in_use(&self) -> usize {
        self.memory.len()
    }
}

impl Drop for Heap {
    fn drop(&mut self) {
        log::debug!("released {} bytes", self.in_use());
    }
}
