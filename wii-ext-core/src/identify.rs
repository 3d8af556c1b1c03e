//! Handshake and family identification.

use embedded_hal_async::delay::DelayNs;
use wii_ext_proto::{ControllerFamily, ID_REGISTER};

use crate::bus::{BusError, FrameSource};
use crate::config::ControllerConfig;

/// Initialise the controller and determine its family.
///
/// Writes every register of the configured handshake, pausing
/// `settle_ms` after each, then reads the identification frame.
///
/// # Errors
///
/// Any bus failure is returned as is. There is no fallback family.
pub async fn identify<S, D>(
    source: &mut S,
    delay: &mut D,
    config: &ControllerConfig,
) -> Result<ControllerFamily, BusError>
where
    S: FrameSource,
    D: DelayNs,
{
    debug!("Handshake {:?}", config.handshake);
    for &(register, value) in config.handshake.writes() {
        if let Err(e) = source.write_register(register, value).await {
            error!("Handshake write {:#x} failed: {:?}", register, e);
            return Err(e);
        }
        delay.delay_ms(config.settle_ms).await;
    }

    let frame = match source.read_frame(ID_REGISTER).await {
        Ok(frame) => frame,
        Err(e) => {
            error!("Identification read failed: {:?}", e);
            return Err(e);
        }
    };

    let family = ControllerFamily::from_id_frame(&frame);
    if family.is_known() {
        info!("Controller {:?} (id {:#x})", family, family.code());
    } else {
        warn!("Unknown controller id {:#x}", family.code());
    }
    Ok(family)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::DEFAULT_CONFIG;
    use crate::testing::{block_on, MockDelay, MockSource};
    use std::vec;
    use wii_ext_proto::{Handshake, RawFrame};

    #[test]
    fn test_standard_handshake_order_and_delays() {
        let mut source = MockSource::identifying_as(0x00);
        let mut delay = MockDelay::default();

        block_on(identify(&mut source, &mut delay, &DEFAULT_CONFIG)).unwrap();

        assert_eq!(source.writes, vec![(0xF0, 0x55), (0xFB, 0x00)]);
        assert_eq!(source.reads, vec![ID_REGISTER]);
        assert_eq!(delay.calls(), 2);
        assert_eq!(delay.total_ms(), 2);
    }

    #[test]
    fn test_legacy_handshake() {
        let mut source = MockSource::identifying_as(0x00);
        let mut delay = MockDelay::default();
        let config = DEFAULT_CONFIG.with_handshake(Handshake::Legacy);

        block_on(identify(&mut source, &mut delay, &config)).unwrap();

        assert_eq!(source.writes, vec![(0x40, 0x00)]);
        assert_eq!(delay.calls(), 1);
    }

    #[test]
    fn test_families() {
        let cases = [
            (0x00, ControllerFamily::Nunchuck),
            (0x01, ControllerFamily::Classic),
            (0x02, ControllerFamily::Unknown(0x0202)),
            (0xFF, ControllerFamily::Unknown(0xFFFF)),
        ];
        for (id_byte, expected) in cases {
            let mut source = MockSource::identifying_as(id_byte);
            let family =
                block_on(identify(&mut source, &mut MockDelay::default(), &DEFAULT_CONFIG));
            assert_eq!(family, Ok(expected), "id byte {:#x}", id_byte);
        }
    }

    #[test]
    fn test_only_byte_five_is_consulted() {
        // Byte 4 disagrees with byte 5; the code still duplicates byte 5
        let mut source =
            MockSource::with_frames([Ok(RawFrame::new([0, 0, 0xA4, 0x20, 0x01, 0x00]))]);
        let family = block_on(identify(&mut source, &mut MockDelay::default(), &DEFAULT_CONFIG));
        assert_eq!(family, Ok(ControllerFamily::Nunchuck));
    }

    #[test]
    fn test_write_failure_is_fatal() {
        let mut source = MockSource::identifying_as(0x01);
        source.fail_writes = Some(BusError::Nack);
        let mut delay = MockDelay::default();

        let result = block_on(identify(&mut source, &mut delay, &DEFAULT_CONFIG));

        assert_eq!(result, Err(BusError::Nack));
        assert!(source.reads.is_empty());
        assert_eq!(delay.calls(), 0);
    }

    #[test]
    fn test_read_failure_is_fatal() {
        let mut source = MockSource::with_frames([Err(BusError::ShortRead)]);
        let result = block_on(identify(&mut source, &mut MockDelay::default(), &DEFAULT_CONFIG));
        assert_eq!(result, Err(BusError::ShortRead));
    }
}
