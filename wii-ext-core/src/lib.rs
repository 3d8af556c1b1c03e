//! Platform-agnostic session handling for Wii extension controllers.
//!
//! This crate drives a Nunchuck or Classic controller over any async
//! embedded-hal I²C bus without platform-specific dependencies. It can be
//! used both in embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! - [`bus`]: Frame source trait ([`FrameSource`]) and its I²C
//!   implementation ([`I2cFrameSource`])
//! - [`identify`]: Handshake and family identification ([`identify()`])
//! - [`controller`]: One identified controller ([`ExtensionController`])
//! - [`output`]: State sink trait ([`StateSink`])
//! - [`poller`]: Orchestrates the poll loop ([`ControllerPoller`])
//! - [`config`]: Timings and handshake selection ([`ControllerConfig`])
//!
//! Frame types and decoders come from `wii-ext-proto` and are re-exported
//! here.
//!
//! # Bus Protocol
//!
//! ```text
//! handshake:  [F0 55] 1ms [FB 00] 1ms        (legacy: [40 00] 1ms)
//! identify:   [FA] 1ms read 6 -> family from byte 5
//! poll:       [00] 1ms read 6 -> decode, then 100ms (10ms if unknown)
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded use)
//! - **`log`**: Log through the `log` facade instead of defmt
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

// This must go first so the logging macros are visible to all modules
#[macro_use]
mod fmt;

pub mod bus;
pub mod config;
pub mod controller;
pub mod identify;
pub mod output;
pub mod poller;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types at crate root
pub use bus::{BusError, FrameSource, I2cFrameSource, EXTENSION_ADDRESS, POINTER_SETTLE_MS};
pub use config::{ControllerConfig, DEFAULT_CONFIG};
pub use controller::ExtensionController;
pub use identify::identify;
pub use output::{OutputError, StateSink};
pub use poller::{ControllerPoller, PollError};
pub use wii_ext_proto::{
    ClassicButtons, ClassicState, ControllerFamily, ControllerReading, Handshake, NunchuckButtons,
    NunchuckState, RawFrame,
};
