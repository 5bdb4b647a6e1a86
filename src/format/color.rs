//! Hex color parsing

use crate::error::{Error, Result};

/// Non-empty and made only of hex digits, either case
pub fn is_hexadecimal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse a six digit hex color (no leading `#`) into red, green and blue
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    if hex.len() != 6 || !is_hexadecimal(hex) {
        tracing::warn!("Rejected hex color: {:?}", hex);
        return Err(Error::NotHexColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| Error::NotHexColor(hex.to_string()))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
