//! State sink trait and error types.

use core::future::Future;
use wii_ext_proto::{ControllerFamily, ControllerReading};

/// Error type for sink operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// Display or transport I/O error.
    Io,
    /// Sink not ready (e.g., display not initialised).
    NotReady,
}

/// Async trait for whatever presents decoded readings.
///
/// A sink is told the family once, before the first reading of a session,
/// so it can draw its static layout (labels, controller ID header).
pub trait StateSink {
    /// Prepare to show readings from a controller of `family`.
    fn start(&mut self, family: ControllerFamily)
        -> impl Future<Output = Result<(), OutputError>>;

    /// Present one reading.
    fn send(&mut self, reading: &ControllerReading)
        -> impl Future<Output = Result<(), OutputError>>;
}
