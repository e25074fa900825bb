// these modules are re-exported as a single module

pub use self::trace::*;
mod trace;

/// VGA and Cirrus register ports
pub struct Port {
}

impl Port {
    pub const ACTL_ADDRESS: u16       = 0x03C0; // attribute controller index and data write
    pub const ACTL_READ_DATA: u16     = 0x03C1;
    pub const SEQ_ADDRESS: u16        = 0x03C4;
    pub const SEQ_DATA: u16           = 0x03C5;
    pub const PEL_MASK: u16           = 0x03C6;
    pub const READ_MISC_OUTPUT: u16   = 0x03CC;
    pub const GRDC_ADDRESS: u16       = 0x03CE;
    pub const GRDC_DATA: u16          = 0x03CF;
    pub const MDA_CRTC_ADDRESS: u16   = 0x03B4;
    pub const VGA_CRTC_ADDRESS: u16   = 0x03D4;
    pub const ACTL_RESET: u16         = 0x03DA; // reading the input status register resets the attribute flip-flop
}

/// segment of the 64k graphics window
pub const SEG_GRAPH: u16 = 0xA000;

/// The I/O surface the mode switching code talks to. Implemented by real port I/O
/// on hardware, and by `TraceBus` in tests and tooling.
pub trait VgaBus {
    /// read byte from I/O port
    fn in_u8(&mut self, port: u16) -> u8;

    /// write byte to I/O port
    fn out_u8(&mut self, port: u16, data: u8);

    /// write word to I/O port, low byte to `port` and high byte to `port + 1`
    fn out_u16(&mut self, port: u16, data: u16);

    /// fills `length` bytes at seg:offset with a repeating 16-bit value
    fn memset16_far(&mut self, seg: u16, offset: u16, data: u16, length: usize);

    /// reads attribute controller register `reg`
    fn get_single_palette_reg(&mut self, reg: u8) -> u8 {
        self.in_u8(Port::ACTL_RESET);
        self.out_u8(Port::ACTL_ADDRESS, reg);
        let v = self.in_u8(Port::ACTL_READ_DATA);
        self.in_u8(Port::ACTL_RESET);
        self.out_u8(Port::ACTL_ADDRESS, 0x20); // re-enable video output
        v
    }

    /// writes attribute controller register `reg`
    fn set_single_palette_reg(&mut self, reg: u8, val: u8) {
        self.in_u8(Port::ACTL_RESET);
        self.out_u8(Port::ACTL_ADDRESS, reg);
        self.out_u8(Port::ACTL_ADDRESS, val);
        self.out_u8(Port::ACTL_ADDRESS, 0x20);
    }
}
