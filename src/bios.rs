// https://wiki.osdev.org/BIOS
// seabios: src/std/bda.h

use crate::memory::{FlatMemory, MemoryAddress};

pub struct BIOS {
}

impl BIOS {
    pub const DATA_SEG: u16           = 0x0040; // bios data segment, 256 byte at 000400 to 0004FF

    // offsets
    pub const DATA_CURRENT_MODE: u16  = 0x0049;
    pub const DATA_VBE_MODE: u16      = 0x00BA;

    /// size of a memory image that covers the interrupt vector table and the bios data area
    pub const LOW_MEMORY_SIZE: usize  = 0x0500;
}

/// The parts of the BIOS data area the video mode code maintains.
pub trait BiosDataArea {
    fn video_mode(&self) -> u8;
    fn set_video_mode(&mut self, mode: u8);
    fn vbe_mode(&self) -> u16;
    fn set_vbe_mode(&mut self, mode: u16);
}

impl BiosDataArea for FlatMemory {
    fn video_mode(&self) -> u8 {
        self.read_u8(MemoryAddress::new(BIOS::DATA_SEG, BIOS::DATA_CURRENT_MODE).value())
    }

    fn set_video_mode(&mut self, mode: u8) {
        self.write_u8(MemoryAddress::new(BIOS::DATA_SEG, BIOS::DATA_CURRENT_MODE).value(), mode);
    }

    fn vbe_mode(&self) -> u16 {
        self.read_u16(MemoryAddress::new(BIOS::DATA_SEG, BIOS::DATA_VBE_MODE).value())
    }

    fn set_vbe_mode(&mut self, mode: u16) {
        self.write_u16(MemoryAddress::new(BIOS::DATA_SEG, BIOS::DATA_VBE_MODE).value(), mode);
    }
}
