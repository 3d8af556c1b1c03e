//! The 6-byte telemetry frame read from an extension controller.

use core::ops::Index;

use crate::format::BinaryByte;

/// Length of every frame the controller returns.
pub const FRAME_LEN: usize = 6;

/// XOR/offset key used by controllers left in obfuscated mode.
pub const LEGACY_KEY: u8 = 0x17;

/// One raw telemetry frame.
///
/// No meaning is attached to the bytes until the frame is handed to a
/// family decoder.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame(pub [u8; FRAME_LEN]);

/// A frame source delivered the wrong number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameLengthError {
    /// Number of bytes actually received.
    pub len: usize,
}

impl RawFrame {
    #[must_use]
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a frame from a received byte slice.
    ///
    /// The slice must be exactly [`FRAME_LEN`] bytes long.
    pub fn from_slice(data: &[u8]) -> Result<Self, FrameLengthError> {
        let bytes: [u8; FRAME_LEN] = data
            .try_into()
            .map_err(|_| FrameLengthError { len: data.len() })?;
        Ok(Self(bytes))
    }

    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Undo the byte obfuscation applied by controllers initialised with
    /// the legacy `0x40 = 0x00` handshake.
    ///
    /// Each byte is transformed as `(x ^ 0x17) + 0x17`, wrapping.
    ///
    /// ```
    /// use wii_ext_proto::RawFrame;
    ///
    /// let frame = RawFrame::new([0x17, 0x00, 0xFF, 0x80, 0x7F, 0xE8]);
    /// assert_eq!(frame.decode_legacy().bytes(), &[0x17, 0x2E, 0xFF, 0xAE, 0x7F, 0x16]);
    /// ```
    #[must_use]
    pub fn decode_legacy(self) -> Self {
        Self(self.0.map(|b| (b ^ LEGACY_KEY).wrapping_add(LEGACY_KEY)))
    }

    /// Render every byte as eight binary digits, for diagnostic display.
    #[must_use]
    pub fn binary_rows(&self) -> [BinaryByte; FRAME_LEN] {
        self.0.map(BinaryByte::new)
    }

    /// Read a low-active bit: `true` when the bit on the wire is 0.
    #[inline]
    #[must_use]
    pub const fn low_active(&self, index: usize, bit: u8) -> bool {
        (self.0[index] >> bit) & 0b0000_0001 == 0
    }
}

impl From<[u8; FRAME_LEN]> for RawFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }
}

impl Index<usize> for RawFrame {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}
