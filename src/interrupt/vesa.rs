use log::debug;

use crate::cpu::{RegisterState, R};

#[cfg(test)]
#[path = "./vesa_test.rs"]
mod vesa_test;

/// AX value reporting "function call failed"
pub const VBE_FAIL: u16 = 0x014F;

/// INT 10h AH=4Fh. VESA BIOS extensions are not provided by this adapter,
/// every sub-function reports failure.
pub fn handle(regs: &mut RegisterState) {
    debug!("cirrus vesa al={:02X}: {}", regs.get_r8(R::AL), regs);
    regs.set_r16(R::AX, VBE_FAIL);
}
