// mode table of the Cirrus Logic CLGD 54xx extended (SVGA) modes
// register values as programmed by the QEMU cirrus vgabios extension

#[cfg(test)]
#[path = "./modes_test.rs"]
mod modes_test;

/// a register program is a list of (register index, value) pairs applied to one register bank
pub type RegisterProgram = &'static [(u8, u8)];

/// selects how the attribute controller mode register is adjusted after a mode switch
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorClass {
    /// 8 bit palette modes
    Indexed,

    /// 15 and 16 bit direct color modes
    Direct,

    /// 24 bit direct color modes
    Direct24,
}

impl ColorClass {
    pub fn value(self) -> u8 {
        match self {
            ColorClass::Indexed => 0,
            ColorClass::Direct => 1,
            ColorClass::Direct24 => 3,
        }
    }

    /// bits to set in attribute register 0x10 after clearing bit 0
    pub fn attribute_mode_bits(self) -> u8 {
        match self {
            ColorClass::Direct24 => 0x41,
            ColorClass::Direct => 0x01,
            ColorClass::Indexed => 0x00,
        }
    }
}

/// size (number of bits) and position of one color component in a direct color pixel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Channel {
    pub mask: u8,
    pub position: u8,
}

#[derive(Debug, PartialEq)]
pub struct ModeDescriptor {
    pub mode: u8,
    pub width: u16,
    pub height: u16,
    pub depth: u16,

    /// written to the hidden DAC register behind the PEL mask (0x03C6)
    pub hidden_dac: u8,

    /// sequencer program (0x03C4)
    pub seq: RegisterProgram,

    /// graphics controller program (0x03CE)
    pub graph: RegisterProgram,

    /// CRT controller program (0x03D4 or 0x03B4)
    pub crtc: RegisterProgram,

    pub bits_per_pixel: u8,
    pub color_class: ColorClass,

    /// VESA memory model: 4 = packed pixel, 6 = direct color
    pub memory_model: u8,
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
    pub reserved: Channel,
}

impl ModeDescriptor {
    /// mode id of the plain VGA entry, applied when a requested mode is unknown
    pub const FALLBACK: u8 = 0xFE;

    pub fn is_fallback(&self) -> bool {
        self.mode == Self::FALLBACK
    }

    pub fn bytes_per_pixel(&self) -> u16 {
        (u16::from(self.bits_per_pixel) + 7) / 8
    }

    pub fn bytes_per_scan_line(&self) -> u32 {
        u32::from(self.width) * u32::from(self.bytes_per_pixel())
    }

    /// amount of video memory the visible screen occupies
    pub fn framebuffer_size(&self) -> u32 {
        self.bytes_per_scan_line() * u32::from(self.height)
    }
}

/// returns the table entry for `mode`. the fallback entry is only returned when asked for by id
pub fn find_mode(mode: u8) -> Option<&'static ModeDescriptor> {
    cirrus_modes().iter().find(|m| m.mode == mode)
}

pub fn cirrus_modes() -> &'static [ModeDescriptor] {
    &CIRRUS_MODES
}

pub const SEQ_VGA: RegisterProgram = &[
    (0x07, 0x00),
];

pub const GRAPH_VGA: RegisterProgram = &[
    (0x09, 0x00), (0x0A, 0x00), (0x0B, 0x00),
];

pub const CRTC_VGA: RegisterProgram = &[
    (0x1A, 0x00), (0x1B, 0x00), (0x1D, 0x00),
];

pub const GRAPH_SVGA_COLOR: RegisterProgram = &[
    (0x00, 0x00), (0x01, 0x00), (0x02, 0x00), (0x03, 0x00), (0x04, 0x00), (0x05, 0x40),
    (0x06, 0x05), (0x07, 0x0F), (0x08, 0xFF), (0x09, 0x00), (0x0A, 0x00), (0x0B, 0x00),
];

pub const SEQ_640X480X8: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x11),
    (0x0B, 0x58), (0x0C, 0x58), (0x0D, 0x58), (0x0E, 0x58), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x33), (0x1C, 0x33), (0x1D, 0x33), (0x1E, 0x33),
];

pub const CRTC_640X480X8: RegisterProgram = &[
    (0x11, 0x2C), (0x00, 0x5F), (0x01, 0x4F), (0x02, 0x4F), (0x03, 0x80), (0x04, 0x52),
    (0x05, 0x1E), (0x06, 0x0B), (0x07, 0x3E), (0x09, 0x40), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0xEA), (0x12, 0xDF), (0x13, 0x50), (0x14, 0x40), (0x15, 0xDF), (0x16, 0x0B),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x22), (0x1D, 0x00),
];

pub const SEQ_640X480X16: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x17),
    (0x0B, 0x58), (0x0C, 0x58), (0x0D, 0x58), (0x0E, 0x58), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x33), (0x1C, 0x33), (0x1D, 0x33), (0x1E, 0x33),
];

pub const CRTC_640X480X16: RegisterProgram = &[
    (0x11, 0x2C), (0x00, 0x5F), (0x01, 0x4F), (0x02, 0x4F), (0x03, 0x80), (0x04, 0x52),
    (0x05, 0x1E), (0x06, 0x0B), (0x07, 0x3E), (0x09, 0x40), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0xEA), (0x12, 0xDF), (0x13, 0xA0), (0x14, 0x40), (0x15, 0xDF), (0x16, 0x0B),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x22), (0x1D, 0x00),
];

pub const SEQ_640X480X24: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x15),
    (0x0B, 0x58), (0x0C, 0x58), (0x0D, 0x58), (0x0E, 0x58), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x33), (0x1C, 0x33), (0x1D, 0x33), (0x1E, 0x33),
];

pub const CRTC_640X480X24: RegisterProgram = &[
    (0x11, 0x2C), (0x00, 0x5F), (0x01, 0x4F), (0x02, 0x4F), (0x03, 0x80), (0x04, 0x52),
    (0x05, 0x1E), (0x06, 0x0B), (0x07, 0x3E), (0x09, 0x40), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0xEA), (0x12, 0xDF), (0x13, 0x00), (0x14, 0x40), (0x15, 0xDF), (0x16, 0x0B),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x32), (0x1D, 0x00),
];

pub const SEQ_800X600X8: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x11),
    (0x0B, 0x23), (0x0C, 0x23), (0x0D, 0x23), (0x0E, 0x23), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x14), (0x1C, 0x14), (0x1D, 0x14), (0x1E, 0x14),
];

pub const CRTC_800X600X8: RegisterProgram = &[
    (0x11, 0x23), (0x00, 0x7D), (0x01, 0x63), (0x02, 0x63), (0x03, 0x80), (0x04, 0x6B),
    (0x05, 0x1A), (0x06, 0x98), (0x07, 0xF0), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x7D), (0x12, 0x57), (0x13, 0x64), (0x14, 0x40), (0x15, 0x57), (0x16, 0x98),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x22), (0x1D, 0x00),
];

pub const SEQ_800X600X16: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x17),
    (0x0B, 0x23), (0x0C, 0x23), (0x0D, 0x23), (0x0E, 0x23), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x14), (0x1C, 0x14), (0x1D, 0x14), (0x1E, 0x14),
];

pub const CRTC_800X600X16: RegisterProgram = &[
    (0x11, 0x23), (0x00, 0x7D), (0x01, 0x63), (0x02, 0x63), (0x03, 0x80), (0x04, 0x6B),
    (0x05, 0x1A), (0x06, 0x98), (0x07, 0xF0), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x7D), (0x12, 0x57), (0x13, 0xC8), (0x14, 0x40), (0x15, 0x57), (0x16, 0x98),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x22), (0x1D, 0x00),
];

pub const SEQ_800X600X24: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x15),
    (0x0B, 0x23), (0x0C, 0x23), (0x0D, 0x23), (0x0E, 0x23), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x14), (0x1C, 0x14), (0x1D, 0x14), (0x1E, 0x14),
];

pub const CRTC_800X600X24: RegisterProgram = &[
    (0x11, 0x23), (0x00, 0x7D), (0x01, 0x63), (0x02, 0x63), (0x03, 0x80), (0x04, 0x6B),
    (0x05, 0x1A), (0x06, 0x98), (0x07, 0xF0), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x7D), (0x12, 0x57), (0x13, 0x2C), (0x14, 0x40), (0x15, 0x57), (0x16, 0x98),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x32), (0x1D, 0x00),
];

pub const SEQ_1024X768X8: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x11),
    (0x0B, 0x76), (0x0C, 0x76), (0x0D, 0x76), (0x0E, 0x76), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x34), (0x1C, 0x34), (0x1D, 0x34), (0x1E, 0x34),
];

pub const CRTC_1024X768X8: RegisterProgram = &[
    (0x11, 0x29), (0x00, 0xA3), (0x01, 0x7F), (0x02, 0x7F), (0x03, 0x86), (0x04, 0x83),
    (0x05, 0x94), (0x06, 0x24), (0x07, 0xF5), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x03), (0x12, 0xFF), (0x13, 0x80), (0x14, 0x40), (0x15, 0xFF), (0x16, 0x24),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x22), (0x1D, 0x00),
];

pub const SEQ_1024X768X16: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x17),
    (0x0B, 0x76), (0x0C, 0x76), (0x0D, 0x76), (0x0E, 0x76), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x34), (0x1C, 0x34), (0x1D, 0x34), (0x1E, 0x34),
];

pub const CRTC_1024X768X16: RegisterProgram = &[
    (0x11, 0x29), (0x00, 0xA3), (0x01, 0x7F), (0x02, 0x7F), (0x03, 0x86), (0x04, 0x83),
    (0x05, 0x94), (0x06, 0x24), (0x07, 0xF5), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x03), (0x12, 0xFF), (0x13, 0x00), (0x14, 0x40), (0x15, 0xFF), (0x16, 0x24),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x32), (0x1D, 0x00),
];

pub const SEQ_1024X768X24: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x15),
    (0x0B, 0x76), (0x0C, 0x76), (0x0D, 0x76), (0x0E, 0x76), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x34), (0x1C, 0x34), (0x1D, 0x34), (0x1E, 0x34),
];

pub const CRTC_1024X768X24: RegisterProgram = &[
    (0x11, 0x29), (0x00, 0xA3), (0x01, 0x7F), (0x02, 0x7F), (0x03, 0x86), (0x04, 0x83),
    (0x05, 0x94), (0x06, 0x24), (0x07, 0xF5), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x03), (0x12, 0xFF), (0x13, 0x80), (0x14, 0x40), (0x15, 0xFF), (0x16, 0x24),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x32), (0x1D, 0x00),
];

pub const SEQ_1280X1024X8: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x11),
    (0x0B, 0x76), (0x0C, 0x76), (0x0D, 0x76), (0x0E, 0x76), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x34), (0x1C, 0x34), (0x1D, 0x34), (0x1E, 0x34),
];

pub const CRTC_1280X1024X8: RegisterProgram = &[
    (0x11, 0x29), (0x00, 0xC3), (0x01, 0x9F), (0x02, 0x9F), (0x03, 0x86), (0x04, 0x83),
    (0x05, 0x94), (0x06, 0x24), (0x07, 0xF7), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x03), (0x12, 0xFF), (0x13, 0xA0), (0x14, 0x40), (0x15, 0xFF), (0x16, 0x24),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x22), (0x1D, 0x00),
];

pub const SEQ_1280X1024X16: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x17),
    (0x0B, 0x76), (0x0C, 0x76), (0x0D, 0x76), (0x0E, 0x76), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x34), (0x1C, 0x34), (0x1D, 0x34), (0x1E, 0x34),
];

pub const CRTC_1280X1024X16: RegisterProgram = &[
    (0x11, 0x29), (0x00, 0xC3), (0x01, 0x9F), (0x02, 0x9F), (0x03, 0x86), (0x04, 0x83),
    (0x05, 0x94), (0x06, 0x24), (0x07, 0xF7), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x03), (0x12, 0xFF), (0x13, 0x40), (0x14, 0x40), (0x15, 0xFF), (0x16, 0x24),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x32), (0x1D, 0x00),
];

pub const SEQ_1600X1200X8: RegisterProgram = &[
    (0x00, 0x03), (0x01, 0x21), (0x02, 0x0F), (0x03, 0x00), (0x04, 0x0E), (0x07, 0x11),
    (0x0B, 0x76), (0x0C, 0x76), (0x0D, 0x76), (0x0E, 0x76), (0x12, 0x04), (0x13, 0x00),
    (0x17, 0x20), (0x1B, 0x34), (0x1C, 0x34), (0x1D, 0x34), (0x1E, 0x34),
];

pub const CRTC_1600X1200X8: RegisterProgram = &[
    (0x11, 0x29), (0x00, 0xC3), (0x01, 0x9F), (0x02, 0x9F), (0x03, 0x86), (0x04, 0x83),
    (0x05, 0x94), (0x06, 0x24), (0x07, 0xF7), (0x09, 0x60), (0x0C, 0x00), (0x0D, 0x00),
    (0x10, 0x03), (0x12, 0xFF), (0x13, 0xA0), (0x14, 0x40), (0x15, 0xFF), (0x16, 0x24),
    (0x17, 0xC3), (0x18, 0xFF), (0x1A, 0x00), (0x1B, 0x22), (0x1D, 0x00),
];

static CIRRUS_MODES: [ModeDescriptor; 17] = [
    ModeDescriptor {
        mode: 0x5F, width: 640, height: 480, depth: 8, hidden_dac: 0x00,
        seq: SEQ_640X480X8, graph: GRAPH_SVGA_COLOR, crtc: CRTC_640X480X8,
        bits_per_pixel: 8, color_class: ColorClass::Indexed, memory_model: 0x04,
        red: Channel { mask: 0, position: 0 }, green: Channel { mask: 0, position: 0 },
        blue: Channel { mask: 0, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x64, width: 640, height: 480, depth: 16, hidden_dac: 0xE1,
        seq: SEQ_640X480X16, graph: GRAPH_SVGA_COLOR, crtc: CRTC_640X480X16,
        bits_per_pixel: 16, color_class: ColorClass::Direct, memory_model: 0x06,
        red: Channel { mask: 5, position: 11 }, green: Channel { mask: 6, position: 5 },
        blue: Channel { mask: 5, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x66, width: 640, height: 480, depth: 15, hidden_dac: 0xF0,
        seq: SEQ_640X480X16, graph: GRAPH_SVGA_COLOR, crtc: CRTC_640X480X16,
        bits_per_pixel: 16, color_class: ColorClass::Direct, memory_model: 0x06,
        red: Channel { mask: 5, position: 10 }, green: Channel { mask: 5, position: 5 },
        blue: Channel { mask: 5, position: 0 }, reserved: Channel { mask: 1, position: 15 },
    },
    ModeDescriptor {
        mode: 0x71, width: 640, height: 480, depth: 24, hidden_dac: 0xE5,
        seq: SEQ_640X480X24, graph: GRAPH_SVGA_COLOR, crtc: CRTC_640X480X24,
        bits_per_pixel: 24, color_class: ColorClass::Direct24, memory_model: 0x06,
        red: Channel { mask: 8, position: 16 }, green: Channel { mask: 8, position: 8 },
        blue: Channel { mask: 8, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x5C, width: 800, height: 600, depth: 8, hidden_dac: 0x00,
        seq: SEQ_800X600X8, graph: GRAPH_SVGA_COLOR, crtc: CRTC_800X600X8,
        bits_per_pixel: 8, color_class: ColorClass::Indexed, memory_model: 0x04,
        red: Channel { mask: 0, position: 0 }, green: Channel { mask: 0, position: 0 },
        blue: Channel { mask: 0, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x65, width: 800, height: 600, depth: 16, hidden_dac: 0xE1,
        seq: SEQ_800X600X16, graph: GRAPH_SVGA_COLOR, crtc: CRTC_800X600X16,
        bits_per_pixel: 16, color_class: ColorClass::Direct, memory_model: 0x06,
        red: Channel { mask: 5, position: 11 }, green: Channel { mask: 6, position: 5 },
        blue: Channel { mask: 5, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x67, width: 800, height: 600, depth: 15, hidden_dac: 0xF0,
        seq: SEQ_800X600X16, graph: GRAPH_SVGA_COLOR, crtc: CRTC_800X600X16,
        bits_per_pixel: 16, color_class: ColorClass::Direct, memory_model: 0x06,
        red: Channel { mask: 5, position: 10 }, green: Channel { mask: 5, position: 5 },
        blue: Channel { mask: 5, position: 0 }, reserved: Channel { mask: 1, position: 15 },
    },
    ModeDescriptor {
        mode: 0x60, width: 1024, height: 768, depth: 8, hidden_dac: 0x00,
        seq: SEQ_1024X768X8, graph: GRAPH_SVGA_COLOR, crtc: CRTC_1024X768X8,
        bits_per_pixel: 8, color_class: ColorClass::Indexed, memory_model: 0x04,
        red: Channel { mask: 0, position: 0 }, green: Channel { mask: 0, position: 0 },
        blue: Channel { mask: 0, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x74, width: 1024, height: 768, depth: 16, hidden_dac: 0xE1,
        seq: SEQ_1024X768X16, graph: GRAPH_SVGA_COLOR, crtc: CRTC_1024X768X16,
        bits_per_pixel: 16, color_class: ColorClass::Direct, memory_model: 0x06,
        red: Channel { mask: 5, position: 11 }, green: Channel { mask: 6, position: 5 },
        blue: Channel { mask: 5, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x68, width: 1024, height: 768, depth: 15, hidden_dac: 0xF0,
        seq: SEQ_1024X768X16, graph: GRAPH_SVGA_COLOR, crtc: CRTC_1024X768X16,
        bits_per_pixel: 16, color_class: ColorClass::Direct, memory_model: 0x06,
        red: Channel { mask: 5, position: 10 }, green: Channel { mask: 5, position: 5 },
        blue: Channel { mask: 5, position: 0 }, reserved: Channel { mask: 1, position: 15 },
    },
    ModeDescriptor {
        mode: 0x78, width: 800, height: 600, depth: 24, hidden_dac: 0xE5,
        seq: SEQ_800X600X24, graph: GRAPH_SVGA_COLOR, crtc: CRTC_800X600X24,
        bits_per_pixel: 24, color_class: ColorClass::Direct24, memory_model: 0x06,
        red: Channel { mask: 8, position: 16 }, green: Channel { mask: 8, position: 8 },
        blue: Channel { mask: 8, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x79, width: 1024, height: 768, depth: 24, hidden_dac: 0xE5,
        seq: SEQ_1024X768X24, graph: GRAPH_SVGA_COLOR, crtc: CRTC_1024X768X24,
        bits_per_pixel: 24, color_class: ColorClass::Direct24, memory_model: 0x06,
        red: Channel { mask: 8, position: 16 }, green: Channel { mask: 8, position: 8 },
        blue: Channel { mask: 8, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x6D, width: 1280, height: 1024, depth: 8, hidden_dac: 0x00,
        seq: SEQ_1280X1024X8, graph: GRAPH_SVGA_COLOR, crtc: CRTC_1280X1024X8,
        bits_per_pixel: 8, color_class: ColorClass::Indexed, memory_model: 0x04,
        red: Channel { mask: 0, position: 0 }, green: Channel { mask: 0, position: 0 },
        blue: Channel { mask: 0, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x69, width: 1280, height: 1024, depth: 15, hidden_dac: 0xF0,
        seq: SEQ_1280X1024X16, graph: GRAPH_SVGA_COLOR, crtc: CRTC_1280X1024X16,
        bits_per_pixel: 16, color_class: ColorClass::Direct, memory_model: 0x06,
        red: Channel { mask: 5, position: 10 }, green: Channel { mask: 5, position: 5 },
        blue: Channel { mask: 5, position: 0 }, reserved: Channel { mask: 1, position: 15 },
    },
    ModeDescriptor {
        mode: 0x75, width: 1280, height: 1024, depth: 16, hidden_dac: 0xE1,
        seq: SEQ_1280X1024X16, graph: GRAPH_SVGA_COLOR, crtc: CRTC_1280X1024X16,
        bits_per_pixel: 16, color_class: ColorClass::Direct, memory_model: 0x06,
        red: Channel { mask: 5, position: 11 }, green: Channel { mask: 6, position: 5 },
        blue: Channel { mask: 5, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0x7B, width: 1600, height: 1200, depth: 8, hidden_dac: 0x00,
        seq: SEQ_1600X1200X8, graph: GRAPH_SVGA_COLOR, crtc: CRTC_1600X1200X8,
        bits_per_pixel: 8, color_class: ColorClass::Indexed, memory_model: 0x04,
        red: Channel { mask: 0, position: 0 }, green: Channel { mask: 0, position: 0 },
        blue: Channel { mask: 0, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
    ModeDescriptor {
        mode: 0xFE, width: 0, height: 0, depth: 0, hidden_dac: 0x00,
        seq: SEQ_VGA, graph: GRAPH_VGA, crtc: CRTC_VGA,
        bits_per_pixel: 0, color_class: ColorClass::Indexed, memory_model: 0xFF,
        red: Channel { mask: 0, position: 0 }, green: Channel { mask: 0, position: 0 },
        blue: Channel { mask: 0, position: 0 }, reserved: Channel { mask: 0, position: 0 },
    },
];
