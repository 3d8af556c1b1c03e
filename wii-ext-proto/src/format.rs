//! No-std binary-digit rendering for diagnostic output.
//!
//! Unknown controllers are shown as raw bytes, one row of eight digits per
//! frame byte, most significant bit first.

use core::fmt;

/// Write a u8 as 8 binary digits, MSB first.
///
/// Returns the number of bytes written (always 8).
///
/// # Panics
///
/// Panics if `buf.len() < 8`.
#[inline]
pub fn write_binary_u8(buf: &mut [u8], value: u8) -> usize {
    debug_assert!(buf.len() >= 8, "buffer too small for binary u8");
    for (i, digit) in buf[..8].iter_mut().enumerate() {
        *digit = if value & (0x80 >> i) != 0 { b'1' } else { b'0' };
    }
    8
}

/// One byte rendered as eight ASCII binary digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryByte([u8; 8]);

impl BinaryByte {
    #[must_use]
    pub fn new(value: u8) -> Self {
        let mut digits = [b'0'; 8];
        write_binary_u8(&mut digits, value);
        Self(digits)
    }

    /// The digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only b'0' and b'1' are ever stored.
        core::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl fmt::Display for BinaryByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BinaryByte {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn test_write_binary_u8() {
        let mut buf = [0u8; 8];
        assert_eq!(write_binary_u8(&mut buf, 0b1010_0011), 8);
        assert_eq!(&buf, b"10100011");
    }

    #[test]
    fn test_display_matches_std_binary() {
        for value in [0u8, 1, 0x55, 0x7F, 0x80, 0xFF] {
            assert_eq!(format!("{}", BinaryByte::new(value)), format!("{:08b}", value));
        }
    }
}
