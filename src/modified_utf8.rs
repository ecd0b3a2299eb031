//! Modified-UTF-8 encode/decode, compatible with the widely-deployed Java
//! `DataOutput.writeUTF` / `DataInput.readUTF` wire format.
//!
//! This differs from standard UTF-8 in two ways:
//! - The NUL code point is encoded as the two bytes `0xC0 0x80` instead of
//!   one zero byte, so encoded strings never contain an embedded NUL.
//! - Code points above the Basic Multilingual Plane are represented as a
//!   UTF-16 surrogate pair, and each surrogate half is independently encoded
//!   as a 3-byte sequence — six bytes total, not the four bytes standard
//!   UTF-8 would use.
//!
//! `TEXT` and `STRING` dictionary values depend on this exact encoding; it
//! is part of the wire contract (see the frame codec's `write_utf`/`read_utf`).

use std::fmt;

#[derive(Debug)]
pub struct ModifiedUtf8Error(String);

impl fmt::Display for ModifiedUtf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ModifiedUtf8Error {}

/// Encodes a Rust `str` (always well-formed UTF-8) into modified-UTF-8 bytes.
pub fn encode(s: &str) -> Result<Vec<u8>, ModifiedUtf8Error> {
    let mut out = Vec::with_capacity(s.len());
    for unit in s.encode_utf16() {
        encode_utf16_unit(unit, &mut out);
    }
    Ok(out)
}

fn encode_utf16_unit(unit: u16, out: &mut Vec<u8>) {
    if unit == 0 {
        out.push(0xC0);
        out.push(0x80);
    } else if unit <= 0x007F {
        out.push(unit as u8);
    } else if unit <= 0x07FF {
        out.push(0xC0 | ((unit >> 6) as u8));
        out.push(0x80 | ((unit & 0x3F) as u8));
    } else {
        out.push(0xE0 | ((unit >> 12) as u8));
        out.push(0x80 | (((unit >> 6) & 0x3F) as u8));
        out.push(0x80 | ((unit & 0x3F) as u8));
    }
}

/// Decodes modified-UTF-8 bytes back into a `String`.
pub fn decode(bytes: &[u8]) -> Result<String, ModifiedUtf8Error> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i];
        if b0 & 0x80 == 0 {
            units.push(b0 as u16);
            i += 1;
        } else if b0 & 0xE0 == 0xC0 {
            let b1 = *bytes.get(i + 1).ok_or_else(too_short)?;
            if b1 & 0xC0 != 0x80 {
                return Err(ModifiedUtf8Error(format!(
                    "malformed 2-byte sequence at offset {i}"
                )));
            }
            units.push((((b0 & 0x1F) as u16) << 6) | ((b1 & 0x3F) as u16));
            i += 2;
        } else if b0 & 0xF0 == 0xE0 {
            let b1 = *bytes.get(i + 1).ok_or_else(too_short)?;
            let b2 = *bytes.get(i + 2).ok_or_else(too_short)?;
            if b1 & 0xC0 != 0x80 || b2 & 0xC0 != 0x80 {
                return Err(ModifiedUtf8Error(format!(
                    "malformed 3-byte sequence at offset {i}"
                )));
            }
            units.push((((b0 & 0x0F) as u16) << 12) | (((b1 & 0x3F) as u16) << 6) | ((b2 & 0x3F) as u16));
            i += 3;
        } else {
            return Err(ModifiedUtf8Error(format!(
                "invalid leading byte 0x{b0:02X} at offset {i}"
            )));
        }
    }
    String::from_utf16(&units).map_err(|e| ModifiedUtf8Error(e.to_string()))
}

fn too_short() -> ModifiedUtf8Error {
    ModifiedUtf8Error("truncated modified-UTF-8 sequence".to_string())
}
