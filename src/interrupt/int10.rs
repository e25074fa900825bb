use log::debug;

use crate::bios::BiosDataArea;
use crate::cpu::{RegisterState, R};
use crate::gpu::Cirrus;
use crate::hardware::VgaBus;
use crate::interrupt::{extbios, vesa};

#[cfg(test)]
#[path = "./int10_test.rs"]
mod int10_test;

/// video related interrupts, the parts the Cirrus extension owns.
/// returns false when the call must be passed on to the standard VGA handler
pub fn handle<B: VgaBus, D: BiosDataArea>(cirrus: &Cirrus, regs: &mut RegisterState, bus: &mut B, bda: &mut D) -> bool {
    match regs.get_r8(R::AH) {
        0x00 => {
            // VIDEO - SET VIDEO MODE
            // AL = desired video mode, bit 7 set to keep video memory
            // Return:
            // AL = video mode flag (Phoenix, AMI BIOS)
            //      20h mode > 7
            //      30h modes 0-5 and 7
            //      3Fh mode 6
            let al = regs.get_r8(R::AL);
            let mode = al & 0x7F;
            let no_clear = al & 0x80 != 0;
            regs.set_r8(R::AL, match mode {
                0x06 => 0x3F,
                m if m > 0x07 => 0x20,
                _ => 0x30,
            });
            cirrus.set_video_mode(bus, bda, mode, no_clear)
        }
        0x12 if regs.get_r8(R::BL) >= 0x80 => extbios::handle(cirrus, regs, bus),
        0x4F => {
            vesa::handle(regs);
            true
        }
        ah => {
            debug!("cirrus int10: passing on ah={:02X}, ax={:04X}, bx={:04X}", ah, regs.get_r16(R::AX), regs.get_r16(R::BX));
            false
        }
    }
}
