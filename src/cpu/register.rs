use std::convert::From;
use std::fmt;

#[cfg(test)]
#[path = "./register_test.rs"]
mod register_test;

#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Register16 {
    pub val: u16,
}

impl Register16 {
    pub fn set_hi(&mut self, val: u8) {
        self.val = (self.val & 0xFF) + (u16::from(val) << 8);
    }
    pub fn set_lo(&mut self, val: u8) {
        self.val = (self.val & 0xFF00) + u16::from(val);
    }
    pub fn lo_u8(self) -> u8 {
        (self.val & 0xFF) as u8
    }
    pub fn hi_u8(self) -> u8 {
        (self.val >> 8) as u8
    }
}

/// names the fields of the register file passed in and out of the BIOS call handlers
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum R {
    AL, CL, DL, BL, AH, CH, DH, BH,
    AX, CX, DX, BX, SP, BP, SI, DI,
    ES, CS, SS, DS,
}

impl R {
    /// index into the general purpose or segment register array
    fn index(self) -> usize {
        match self {
            R::AL | R::AH | R::AX | R::ES => 0,
            R::CL | R::CH | R::CX | R::CS => 1,
            R::DL | R::DH | R::DX | R::SS => 2,
            R::BL | R::BH | R::BX | R::DS => 3,
            R::SP => 4,
            R::BP => 5,
            R::SI => 6,
            R::DI => 7,
        }
    }

    pub fn is_8bit(self) -> bool {
        match self {
            R::AL | R::CL | R::DL | R::BL | R::AH | R::CH | R::DH | R::BH => true,
            _ => false,
        }
    }

    pub fn is_sreg(self) -> bool {
        match self {
            R::ES | R::CS | R::SS | R::DS => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            R::AL => "al",
            R::CL => "cl",
            R::DL => "dl",
            R::BL => "bl",
            R::AH => "ah",
            R::CH => "ch",
            R::DH => "dh",
            R::BH => "bh",
            R::AX => "ax",
            R::CX => "cx",
            R::DX => "dx",
            R::BX => "bx",
            R::SP => "sp",
            R::BP => "bp",
            R::SI => "si",
            R::DI => "di",
            R::ES => "es",
            R::CS => "cs",
            R::SS => "ss",
            R::DS => "ds",
        }
    }
}

/// The register file a BIOS call handler reads its request from and writes its reply into.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct RegisterState {
    pub gpr: [Register16; 8],
    pub sreg16: [u16; 4],
    pub flags: u16,
}

impl RegisterState {
    pub fn get_r8(&self, r: R) -> u8 {
        match r {
            R::AL | R::CL | R::DL | R::BL => self.gpr[r.index()].lo_u8(),
            R::AH | R::CH | R::DH | R::BH => self.gpr[r.index()].hi_u8(),
            _ => unreachable!("not a 8-bit register: {}", r.as_str()),
        }
    }

    pub fn set_r8(&mut self, r: R, val: u8) {
        match r {
            R::AL | R::CL | R::DL | R::BL => self.gpr[r.index()].set_lo(val),
            R::AH | R::CH | R::DH | R::BH => self.gpr[r.index()].set_hi(val),
            _ => unreachable!("not a 8-bit register: {}", r.as_str()),
        }
    }

    pub fn get_r16(&self, r: R) -> u16 {
        if r.is_8bit() {
            unreachable!("not a 16-bit register: {}", r.as_str());
        }
        if r.is_sreg() {
            self.sreg16[r.index()]
        } else {
            self.gpr[r.index()].val
        }
    }

    pub fn set_r16(&mut self, r: R, val: u16) {
        if r.is_8bit() {
            unreachable!("not a 16-bit register: {}", r.as_str());
        }
        if r.is_sreg() {
            self.sreg16[r.index()] = val;
        } else {
            self.gpr[r.index()].val = val;
        }
    }
}

impl fmt::Display for RegisterState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a={:04X} b={:04X} c={:04X} d={:04X} ds={:04X} es={:04X} si={:04X} di={:04X} bp={:04X} f={:04X}",
            self.get_r16(R::AX),
            self.get_r16(R::BX),
            self.get_r16(R::CX),
            self.get_r16(R::DX),
            self.get_r16(R::DS),
            self.get_r16(R::ES),
            self.get_r16(R::SI),
            self.get_r16(R::DI),
            self.get_r16(R::BP),
            self.flags)
    }
}
