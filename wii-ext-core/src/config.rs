//! Compile-time controller configuration.

use wii_ext_proto::Handshake;

/// Configuration for one controller session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Initialisation sequence written before identification.
    pub handshake: Handshake,
    /// Pause after each handshake write.
    pub settle_ms: u32,
    /// Pause between polls of a Nunchuck or Classic controller.
    pub poll_interval_ms: u32,
    /// Pause between polls of an unknown controller.
    pub raw_poll_interval_ms: u32,
}

/// Two-step handshake, 1 ms settle, 100 ms poll interval (10 ms for raw).
pub const DEFAULT_CONFIG: ControllerConfig = ControllerConfig {
    handshake: Handshake::Standard,
    settle_ms: 1,
    poll_interval_ms: 100,
    raw_poll_interval_ms: 10,
};

impl ControllerConfig {
    /// Same timings with a different handshake.
    #[must_use]
    pub const fn with_handshake(self, handshake: Handshake) -> Self {
        Self { handshake, ..self }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_default_config() {
        assert_eq!(ControllerConfig::default(), DEFAULT_CONFIG);
        assert_eq!(DEFAULT_CONFIG.handshake, Handshake::Standard);
        assert_eq!(DEFAULT_CONFIG.poll_interval_ms, 100);
        assert_eq!(DEFAULT_CONFIG.raw_poll_interval_ms, 10);
    }

    #[test]
    fn test_with_handshake_keeps_timings() {
        let legacy = DEFAULT_CONFIG.with_handshake(Handshake::Legacy);
        assert_eq!(legacy.handshake, Handshake::Legacy);
        assert_eq!(legacy.settle_ms, DEFAULT_CONFIG.settle_ms);
        assert_eq!(legacy.poll_interval_ms, DEFAULT_CONFIG.poll_interval_ms);
    }
}
