//! Wii extension controller reader for RP2040.
//!
//! This crate wires the platform-agnostic controller session from
//! `wii-ext-core` to the RP2040 I²C peripheral and presents readings
//! over defmt.

#![no_std]

// Re-export core types for convenience
pub use wii_ext_core::{
    BusError, ClassicButtons, ClassicState, ControllerConfig, ControllerFamily, ControllerPoller,
    ControllerReading, ExtensionController, FrameSource, Handshake, I2cFrameSource,
    NunchuckButtons, NunchuckState, OutputError, PollError, RawFrame, StateSink, DEFAULT_CONFIG,
};

pub mod display;

pub use display::DefmtDisplay;

/// I²C bus frequency. Extension controllers run in fast mode.
pub const I2C_FREQUENCY: u32 = 400_000;

/// Controller configuration selected by Cargo features.
#[cfg(not(feature = "legacy-handshake"))]
pub const CONTROLLER_CONFIG: ControllerConfig = DEFAULT_CONFIG;

/// Controller configuration selected by Cargo features.
#[cfg(feature = "legacy-handshake")]
pub const CONTROLLER_CONFIG: ControllerConfig = DEFAULT_CONFIG.with_handshake(Handshake::Legacy);
