use std::convert::TryFrom;

use crate::error::Error;

#[cfg(test)]
#[path = "./tools_test.rs"]
mod tools_test;

/// parses a hex string, with or without "0x" prefix and "_" separators
pub fn parse_hex(s: &str) -> Result<u16, Error> {
    let x = s.replace("_", "").to_lowercase();
    let digits = if x.starts_with("0x") {
        &x[2..]
    } else if x.ends_with('h') {
        &x[..x.len() - 1]
    } else {
        &x[..]
    };
    u16::from_str_radix(digits, 16).map_err(|e| Error::InvalidNumber(s.to_owned(), e))
}

/// parses a hex string that must fit in a byte
pub fn parse_hex_u8(s: &str) -> Result<u8, Error> {
    let v = parse_hex(s)?;
    u8::try_from(v).map_err(|_| Error::OutOfRange(s.to_owned()))
}

pub fn hex_words(data: &[u16]) -> String {
    let strs: Vec<String> = data.iter().map(|w| format!("{:04X}", w)).collect();
    strs.join(",")
}
