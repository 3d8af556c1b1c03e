//! Controller identification: handshake sequences, register pointers and
//! family codes.

use crate::frame::RawFrame;

/// Register holding the identification frame.
pub const ID_REGISTER: u8 = 0xFA;

/// Register holding the telemetry frame.
pub const DATA_REGISTER: u8 = 0x00;

/// Family code reported by a Nunchuck.
pub const NUNCHUCK_ID: u16 = 0x0000;

/// Family code reported by a Classic controller.
pub const CLASSIC_ID: u16 = 0x0101;

/// Frame byte the family code is built from.
const ID_BYTE: usize = 5;

/// Initialisation sequence written to the controller before identification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handshake {
    /// `0xF0 = 0x55`, `0xFB = 0x00`. Works with every extension and
    /// leaves the data unobfuscated.
    #[default]
    Standard,
    /// `0x40 = 0x00`. Only understood by original Nunchucks; every
    /// byte read afterwards must go through [`RawFrame::decode_legacy`].
    Legacy,
}

impl Handshake {
    /// Register writes making up the sequence, in order.
    #[must_use]
    pub const fn writes(self) -> &'static [(u8, u8)] {
        match self {
            Self::Standard => &[(0xF0, 0x55), (0xFB, 0x00)],
            Self::Legacy => &[(0x40, 0x00)],
        }
    }

    /// Whether frames read after this handshake are obfuscated.
    #[inline]
    #[must_use]
    pub const fn obfuscates(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

/// Extension controller family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerFamily {
    Nunchuck,
    Classic,
    /// Anything else, with the code it reported.
    Unknown(u16),
}

impl ControllerFamily {
    /// Map a family code to a family.
    ///
    /// ```
    /// use wii_ext_proto::ControllerFamily;
    ///
    /// assert_eq!(ControllerFamily::from_code(0x0000), ControllerFamily::Nunchuck);
    /// assert_eq!(ControllerFamily::from_code(0x0101), ControllerFamily::Classic);
    /// assert_eq!(ControllerFamily::from_code(0x0303), ControllerFamily::Unknown(0x0303));
    /// ```
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            NUNCHUCK_ID => Self::Nunchuck,
            CLASSIC_ID => Self::Classic,
            other => Self::Unknown(other),
        }
    }

    /// Resolve the family from a frame read at [`ID_REGISTER`].
    #[must_use]
    pub const fn from_id_frame(frame: &RawFrame) -> Self {
        Self::from_code(family_code(frame))
    }

    /// The code this family is identified by.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Nunchuck => NUNCHUCK_ID,
            Self::Classic => CLASSIC_ID,
            Self::Unknown(code) => code,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

/// Build the 16-bit family code from an identification frame.
///
/// Byte 5 fills both halves of the code; byte 4 is not consulted even
/// though the identifier spans bytes 4 and 5 on the wire.
#[inline]
#[must_use]
pub const fn family_code(frame: &RawFrame) -> u16 {
    let id = frame.0[ID_BYTE] as u16;
    (id << 8) | id
}
