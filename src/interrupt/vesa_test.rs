use pretty_assertions::assert_eq;

use crate::cpu::{RegisterState, R};
use crate::interrupt::vesa;

#[test]
fn every_function_fails() {
    for al in 0..=0xFFu8 {
        let mut regs = RegisterState::default();
        regs.set_r8(R::AH, 0x4F);
        regs.set_r8(R::AL, al);
        regs.set_r16(R::BX, 0x4112);
        regs.set_r16(R::DI, 0x0200);

        vesa::handle(&mut regs);
        assert_eq!(vesa::VBE_FAIL, regs.get_r16(R::AX));
        assert_eq!(0x4112, regs.get_r16(R::BX));
        assert_eq!(0x0200, regs.get_r16(R::DI));
    }
}
