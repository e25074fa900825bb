use log::debug;

use crate::cpu::{RegisterState, R};
use crate::gpu::{find_mode, Chip, Cirrus};
use crate::hardware::VgaBus;

#[cfg(test)]
#[path = "./extbios_test.rs"]
mod extbios_test;

/// Cirrus vendor extension calls, INT 10h AH=12h with the function in BL.
/// Returns false for functions this adapter does not implement.
pub fn handle<B: VgaBus>(cirrus: &Cirrus, regs: &mut RegisterState, bus: &mut B) -> bool {
    let bl = regs.get_r8(R::BL);
    debug!("cirrus extbios bl={:02X}", bl);
    match bl {
        0x80 => {
            // query chip revision
            let chip = Chip::from_id(cirrus.chip_id(bus));
            regs.set_r16(R::AX, chip.revision_code());
            regs.set_r16(R::BX, 0);
        }
        0x81 => {
            // BIOS version
            regs.set_r16(R::AX, 0x0100);
        }
        0x82 => {
            // query design revision
            let v = cirrus.chip_id(bus) & 0x03;
            regs.set_r8(R::AL, v);
            regs.set_r8(R::AH, 0xAF);
        }
        0x85 => {
            // installed memory, in 64k units
            let size = cirrus.memory_size(bus);
            regs.set_r8(R::AL, size);
        }
        0x9A => {
            // enhanced mode signature
            regs.set_r16(R::AX, 0x4060);
            regs.set_r16(R::CX, 0x1132);
        }
        0xA0 => {
            // query video mode support
            let mode = regs.get_r8(R::AL) & 0x7F;
            let found = find_mode(mode).is_some();
            regs.set_r8(R::AH, if found { 1 } else { 0 });
            regs.set_r16(R::SI, 0xFFFF);
            regs.set_r16(R::BX, cirrus.callback_offset);
            regs.set_r16(R::DI, cirrus.callback_offset);
            regs.set_r16(R::DS, cirrus.callback_offset);
            regs.set_r16(R::ES, cirrus.callback_offset);
        }
        0xA1 => {
            // monitor type: IBM 8512/8513 colour
            regs.set_r16(R::BX, 0x0E00);
        }
        0xA2 => {
            // horizontal sync range: 31.5 to 64.0 kHz
            regs.set_r8(R::AL, 0x07);
        }
        0xAE => {
            // high refresh: 75 Hz
            regs.set_r8(R::AL, 0x01);
        }
        _ => {
            debug!("cirrus extbios: unhandled bl={:02X}", bl);
            return false;
        }
    }
    true
}
