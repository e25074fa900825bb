use log::trace;

#[derive(Clone, Default)]
pub struct FlatMemory {
    pub memory: Vec<u8>,
}

impl FlatMemory {
    pub fn new(size: usize) -> Self {
        FlatMemory { memory: vec![0u8; size] }
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    pub fn read_u8(&self, addr: u32) -> u8 {
        self.memory[addr as usize]
    }

    pub fn read_u16(&self, addr: u32) -> u16 {
        u16::from(self.read_u8(addr + 1)) << 8 | u16::from(self.read_u8(addr))
    }

    pub fn write_u8(&mut self, addr: u32, data: u8) {
        self.memory[addr as usize] = data;
    }

    pub fn write_u16(&mut self, addr: u32, data: u16) {
        self.write_u8(addr, data as u8);
        self.write_u8(addr + 1, (data >> 8) as u8);
    }

    pub fn read(&self, addr: u32, length: usize) -> &[u8] {
        let addr = addr as usize;
        &self.memory[addr..addr+length]
    }

    /// fills `length` bytes starting at `addr` with a repeating little-endian word,
    /// clipped to the end of memory
    pub fn fill_u16(&mut self, addr: u32, data: u16, length: usize) {
        let start = (addr as usize).min(self.memory.len());
        let end = start.saturating_add(length).min(self.memory.len());
        trace!("fill {:06X}..{:06X} with {:04X}", start, end, data);
        let bytes = data.to_le_bytes();
        for (i, b) in self.memory[start..end].iter_mut().enumerate() {
            *b = bytes[i & 1];
        }
    }
}
