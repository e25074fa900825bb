// Cirrus Logic CLGD 54xx extended mode switching
// see qemu hw/display/cirrus_vga.c for the register semantics

use log::debug;

use crate::bios::BiosDataArea;
use crate::gpu::{apply_program, find_mode, ModeDescriptor};
use crate::hardware::{Port, VgaBus, SEG_GRAPH};

#[cfg(test)]
#[path = "./cirrus_test.rs"]
mod cirrus_test;

/// fill pattern used when clearing video memory on a mode switch
pub const CLEAR_PATTERN: u16 = 0xFFFF;

/// size of one memory bank at 16k granularity
pub const BANK_SIZE: usize = 16 * 1024;

/// the chip as identified by CRT controller register 0x27
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Chip {
    GD5430,
    GD5446,
    Unknown(u8),
}

impl Chip {
    pub fn from_id(id: u8) -> Self {
        match id {
            0xA0 => Chip::GD5430,
            0xB8 => Chip::GD5446,
            _ => Chip::Unknown(id),
        }
    }

    /// revision code reported by the vendor extension call BL=80h
    pub fn revision_code(self) -> u16 {
        match self {
            Chip::GD5430 => 0x0032,
            Chip::GD5446 => 0x0039,
            Chip::Unknown(_) => 0x00FF,
        }
    }
}

/// decodes the DRAM control register (SR0F) into the installed memory, in 64k units
pub fn decode_memory_size(v: u8) -> u8 {
    let x = (v >> 3) & 0x03;
    if x == 0x03 {
        if v & 0x80 != 0 {
            0x40 // 4 MB
        } else {
            0x20 // 2 MB
        }
    } else {
        0x04 << x
    }
}

#[derive(Clone, Debug, Default)]
pub struct Cirrus {
    /// offset returned by the mode support query for its callback pointers
    pub callback_offset: u16,
}

impl Cirrus {
    pub fn new(callback_offset: u16) -> Self {
        Cirrus {
            callback_offset,
        }
    }

    /// returns true if the extension registers unlock, meaning a Cirrus chip is present
    pub fn check<B: VgaBus>(&self, bus: &mut B) -> bool {
        bus.out_u16(Port::SEQ_ADDRESS, 0x9206);
        bus.in_u8(Port::SEQ_DATA) == 0x12
    }

    /// power-on setup. returns false if no Cirrus chip was found
    pub fn init<B: VgaBus>(&self, bus: &mut B) -> bool {
        debug!("cirrus init");
        if !self.check(bus) {
            return false;
        }
        debug!("cirrus init 2");

        // mirror the DRAM bank width into the scratch register
        bus.out_u8(Port::SEQ_ADDRESS, 0x0F);
        let v = bus.in_u8(Port::SEQ_DATA);
        bus.out_u16(Port::SEQ_ADDRESS, u16::from(v & 0x18) << 8 | 0x0A);

        // standard vga mode
        bus.out_u16(Port::SEQ_ADDRESS, 0x0007);

        // reset the BitBLT engine
        bus.out_u16(Port::GRDC_ADDRESS, 0x0431);
        bus.out_u16(Port::GRDC_ADDRESS, 0x0031);
        true
    }

    /// address port of the CRT controller, selected by the I/O address bit of misc output
    pub fn crtc_address<B: VgaBus>(&self, bus: &mut B) -> u16 {
        if bus.in_u8(Port::READ_MISC_OUTPUT) & 1 != 0 {
            Port::VGA_CRTC_ADDRESS
        } else {
            Port::MDA_CRTC_ADDRESS
        }
    }

    /// reads the chip id register (CR27)
    pub fn chip_id<B: VgaBus>(&self, bus: &mut B) -> u8 {
        let crtc_addr = self.crtc_address(bus);
        bus.out_u8(crtc_addr, 0x27);
        bus.in_u8(crtc_addr + 1)
    }

    /// programs all registers of `mode`. the register programs must run in
    /// sequencer, graphics, crtc order after the unlock
    pub fn switch_mode<B: VgaBus>(&self, bus: &mut B, mode: &ModeDescriptor) {
        // unlock the extension registers
        bus.out_u16(Port::SEQ_ADDRESS, 0x1206);
        apply_program(bus, mode.seq, Port::SEQ_ADDRESS);
        apply_program(bus, mode.graph, Port::GRDC_ADDRESS);
        let crtc_addr = self.crtc_address(bus);
        apply_program(bus, mode.crtc, crtc_addr);

        // four reads of the PEL mask open the hidden DAC register for one write
        bus.out_u8(Port::PEL_MASK, 0x00);
        for _ in 0..4 {
            bus.in_u8(Port::PEL_MASK);
        }
        bus.out_u8(Port::PEL_MASK, mode.hidden_dac);
        bus.out_u8(Port::PEL_MASK, 0xFF);

        let v = bus.get_single_palette_reg(0x10) & 0xFE;
        bus.set_single_palette_reg(0x10, v | mode.color_class.attribute_mode_bits());
    }

    /// returns the installed video memory in 64k units
    pub fn memory_size<B: VgaBus>(&self, bus: &mut B) -> u8 {
        bus.out_u8(Port::SEQ_ADDRESS, 0x0F);
        decode_memory_size(bus.in_u8(Port::SEQ_DATA))
    }

    fn enable_16k_granularity<B: VgaBus>(&self, bus: &mut B) {
        bus.out_u8(Port::GRDC_ADDRESS, 0x0B);
        let v = bus.in_u8(Port::GRDC_DATA);
        bus.out_u8(Port::GRDC_DATA, v | 0x20);
    }

    /// fills all of video memory with `pattern`, one 16k bank at a time
    pub fn clear_vram<B: VgaBus>(&self, bus: &mut B, pattern: u16) {
        self.enable_16k_granularity(bus);
        let count = u16::from(self.memory_size(bus)) * 4;
        for bank in 0..count {
            bus.out_u16(Port::GRDC_ADDRESS, bank << 8 | 0x09);
            bus.memset16_far(SEG_GRAPH, 0, pattern, BANK_SIZE);
        }
        bus.out_u16(Port::GRDC_ADDRESS, 0x0009);
    }

    /// switches to `mode`, returns false if the mode is not a Cirrus mode.
    /// in that case the extension registers are reset to plain vga and the
    /// BIOS data area mode is left alone
    pub fn set_video_mode<B: VgaBus, D: BiosDataArea>(&self, bus: &mut B, bda: &mut D, mode: u8, no_clear: bool) -> bool {
        debug!("cirrus mode {:02X}", mode);
        bda.set_vbe_mode(0);
        if let Some(entry) = find_mode(mode) {
            self.switch_mode(bus, entry);
            if !no_clear {
                self.clear_vram(bus, CLEAR_PATTERN);
            }
            bda.set_video_mode(mode);
            return true;
        }
        if let Some(entry) = find_mode(ModeDescriptor::FALLBACK) {
            self.switch_mode(bus, entry);
        }
        debug!("cirrus mode switch regular");
        false
    }
}
