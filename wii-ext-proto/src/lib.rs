//! Frame decoding for Wii extension controllers.
//!
//! Nunchuck and Classic controllers answer every poll with a 6-byte frame.
//! This crate turns those frames into typed state:
//!
//! - **Frames**: [`RawFrame`], legacy de-obfuscation, binary diagnostics
//! - **Identification**: [`ControllerFamily`], [`family_code`], [`Handshake`]
//! - **Decoders**: [`nunchuck::decode`], [`classic::decode`] and their
//!   stateful counterparts [`NunchuckDecoder`], [`ClassicDecoder`]
//! - **Repeat tracking**: [`RepeatState`], shared by both families
//! - **Selection**: [`FamilyDecoder`] picks the decoder for a family and
//!   yields a [`ControllerReading`]
//!
//! # Example
//!
//! ```
//! use wii_ext_proto::{ControllerFamily, ControllerReading, FamilyDecoder, RawFrame};
//!
//! let id_frame = RawFrame::new([0x00, 0x00, 0xA4, 0x20, 0x01, 0x01]);
//! let family = ControllerFamily::from_id_frame(&id_frame);
//! assert_eq!(family, ControllerFamily::Classic);
//!
//! let mut decoder = FamilyDecoder::for_family(family);
//! let frame = RawFrame::new([0x9F, 0x5F, 0x8F, 0x00, 0xFF, 0xFF]);
//! if let ControllerReading::Classic(state) = decoder.decode(&frame) {
//!     assert_eq!(state.left_stick.x, 31);
//!     assert_eq!(state.right_stick.x, 0b10011);
//! }
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod buttons;
pub mod classic;
pub mod decoder;
pub mod format;
pub mod frame;
pub mod identity;
pub mod nunchuck;
pub mod repeat;

pub use buttons::{ButtonSet, ClassicButtons, NunchuckButtons};
pub use classic::{ClassicDecoder, ClassicState, Stick};
pub use decoder::{ControllerReading, FamilyDecoder};
pub use format::{write_binary_u8, BinaryByte};
pub use frame::{FrameLengthError, RawFrame, FRAME_LEN, LEGACY_KEY};
pub use identity::{
    family_code, ControllerFamily, Handshake, CLASSIC_ID, DATA_REGISTER, ID_REGISTER, NUNCHUCK_ID,
};
pub use nunchuck::{Acceleration, NunchuckDecoder, NunchuckState};
pub use repeat::RepeatState;
