use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::gpu::decode_memory_size;
use crate::tools::{parse_hex, parse_hex_u8};

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

/// Strap and identification values of an emulated adapter.
///
/// ```toml
/// chip_id = 0xA0          # CR27, 0xA0 = CL-GD5430, 0xB8 = CL-GD5446
/// dram_control = 0x18     # SR0F, bits 3-4 and 7 encode the installed memory
/// color_emulation = true  # misc output bit 0, selects the CRTC at 0x03D4
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    /// false emulates a plain VGA that fails the Cirrus unlock check
    pub cirrus_present: bool,

    /// value of the chip id register (CR27)
    pub chip_id: u8,

    /// value of the DRAM control register (SR0F)
    pub dram_control: u8,

    /// misc output bit 0, colour (0x03Dx) or mono (0x03Bx) register addressing
    pub color_emulation: bool,

    /// initial value of attribute controller mode register (0x10)
    pub attribute_mode: u8,

    /// offset reported by the mode support query (BL=A0h) for its callback pointers
    pub callback_offset: u16,
}

impl Default for AdapterConfig {
    /// a 4 MB CL-GD5446 in colour mode, as emulated by qemu
    fn default() -> Self {
        AdapterConfig {
            cirrus_present: true,
            chip_id: 0xB8,
            dram_control: 0x98,
            color_emulation: true,
            attribute_mode: 0x0C,
            callback_offset: 0x0000,
        }
    }
}

impl AdapterConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// applies a "key=value" override from the command line, value in hex
    pub fn set_override(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "chip_id" => self.chip_id = parse_hex_u8(value)?,
            "dram_control" => self.dram_control = parse_hex_u8(value)?,
            "attribute_mode" => self.attribute_mode = parse_hex_u8(value)?,
            "callback_offset" => self.callback_offset = parse_hex(value)?,
            "color_emulation" => self.color_emulation = parse_hex(value)? != 0,
            "cirrus_present" => self.cirrus_present = parse_hex(value)? != 0,
            _ => return Err(Error::UnknownSetting(key.to_owned())),
        }
        Ok(())
    }

    /// size of the installed video memory in bytes, decoded from `dram_control`
    pub fn vram_size(&self) -> usize {
        usize::from(decode_memory_size(self.dram_control)) * 64 * 1024
    }
}
