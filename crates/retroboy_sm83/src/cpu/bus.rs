use crate::ADDRESS_SPACE;

/// Abstraction over the memory bus.
///
/// Both accessors are total over the 16-bit address space; the core never
/// expects a fault from an unmapped region.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

/// Flat 64 KiB of RAM with no memory-mapped I/O.
#[derive(Clone)]
pub struct FlatBus {
    memory: Box<[u8; ADDRESS_SPACE]>,
}

impl Default for FlatBus {
    fn default() -> Self {
        Self {
            memory: Box::new([0; ADDRESS_SPACE]),
        }
    }
}

impl FlatBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `bytes` into memory starting at `addr`, wrapping at 0xFFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut cursor = addr;
        for &byte in bytes {
            self.memory[cursor as usize] = byte;
            cursor = cursor.wrapping_add(1);
        }
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory[..]
    }
}

impl std::fmt::Debug for FlatBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatBus")
            .field("len", &self.memory.len())
            .finish()
    }
}

impl Bus for FlatBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}
