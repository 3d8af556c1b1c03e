//! One identified controller and its decoder.

use embedded_hal_async::delay::DelayNs;
use wii_ext_proto::{ControllerFamily, ControllerReading, FamilyDecoder, DATA_REGISTER};

use crate::bus::{BusError, FrameSource};
use crate::config::ControllerConfig;
use crate::identify::identify;

/// A connected extension controller.
///
/// The family is fixed when the session is created. The decoder chosen
/// for it owns the repeat state, so this is the single owner of
/// everything that survives from one poll to the next.
pub struct ExtensionController<S, D> {
    source: S,
    delay: D,
    config: ControllerConfig,
    family: ControllerFamily,
    decoder: FamilyDecoder,
}

impl<S: FrameSource, D: DelayNs> ExtensionController<S, D> {
    /// Run the handshake and identification and start a session.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the controller could not be identified.
    pub async fn connect(
        mut source: S,
        mut delay: D,
        config: ControllerConfig,
    ) -> Result<Self, BusError> {
        let family = identify(&mut source, &mut delay, &config).await?;
        Ok(Self {
            source,
            delay,
            config,
            family,
            decoder: FamilyDecoder::for_family(family),
        })
    }

    #[inline]
    #[must_use]
    pub fn family(&self) -> ControllerFamily {
        self.family
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Read and decode one frame.
    ///
    /// # Errors
    ///
    /// A failed read is returned without touching the repeat state, so the
    /// next successful poll compares against the last frame that decoded.
    pub async fn poll(&mut self) -> Result<ControllerReading, BusError> {
        let frame = self.source.read_frame(DATA_REGISTER).await?;
        let reading = self.decoder.decode(&frame);
        trace!("Frame {:?}", frame);
        Ok(reading)
    }

    /// Repeat the handshake and identification.
    ///
    /// On success the family is replaced and the repeat state starts over,
    /// even if the family did not change. On failure the session is kept
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns the bus error from [`identify`].
    pub async fn reidentify(&mut self) -> Result<ControllerFamily, BusError> {
        let family = identify(&mut self.source, &mut self.delay, &self.config).await?;
        if family != self.family {
            info!("Family changed from {:?} to {:?}", self.family, family);
        }
        self.family = family;
        self.decoder = FamilyDecoder::for_family(family);
        Ok(family)
    }

    /// Pause before the next poll, which depends on the family.
    #[must_use]
    pub fn poll_interval_ms(&self) -> u32 {
        if self.family.is_known() {
            self.config.poll_interval_ms
        } else {
            self.config.raw_poll_interval_ms
        }
    }

    /// Wait for [`poll_interval_ms`](Self::poll_interval_ms).
    pub async fn wait_next_poll(&mut self) {
        let interval = self.poll_interval_ms();
        self.delay.delay_ms(interval).await;
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Release the frame source and delay.
    pub fn into_parts(self) -> (S, D) {
        (self.source, self.delay)
    }
}
