//! Frame source trait, bus errors, and the I²C implementation.

use core::future::Future;

use embedded_hal::i2c::ErrorKind;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use wii_ext_proto::{FrameLengthError, Handshake, RawFrame, FRAME_LEN};

/// 7-bit I²C address shared by all Wii extension controllers.
pub const EXTENSION_ADDRESS: u8 = 0x52;

/// Pause between writing the register pointer and reading the frame.
pub const POINTER_SETTLE_MS: u32 = 1;

/// Error type for bus transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Address or data byte not acknowledged.
    Nack,
    /// Arbitration loss, overrun or any other transport fault.
    Bus,
    /// Response was not exactly one frame long.
    ShortRead,
}

impl From<FrameLengthError> for BusError {
    fn from(_: FrameLengthError) -> Self {
        BusError::ShortRead
    }
}

/// Map an I²C error to [`BusError`] by its kind.
#[inline]
fn i2c_error_to_bus_error<E: embedded_hal::i2c::Error>(e: E) -> BusError {
    match e.kind() {
        ErrorKind::NoAcknowledge(_) => BusError::Nack,
        _ => BusError::Bus,
    }
}

/// Async trait for anything that can hand out controller frames.
///
/// This is the only view the rest of the crate has of the bus, so the
/// session and poller can be exercised against mocks on the host.
pub trait FrameSource {
    /// Point the controller at `register` and read one frame from it.
    fn read_frame(&mut self, register: u8) -> impl Future<Output = Result<RawFrame, BusError>>;

    /// Write a single configuration register.
    fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> impl Future<Output = Result<(), BusError>>;
}

/// [`FrameSource`] over an async I²C bus.
///
/// Each frame read is two transactions: a one-byte pointer write, a
/// [`POINTER_SETTLE_MS`] pause, and a six-byte read. The pointer write and
/// the read are kept separate because the controller needs the pause to
/// latch its sensors; a repeated-start `write_read` does not give it one.
pub struct I2cFrameSource<I, D> {
    i2c: I,
    delay: D,
    address: u8,
    obfuscated: bool,
}

impl<I: I2c, D: DelayNs> I2cFrameSource<I, D> {
    /// Create a frame source at the default [`EXTENSION_ADDRESS`].
    #[must_use]
    pub fn new(i2c: I, delay: D) -> Self {
        Self::with_address(i2c, delay, EXTENSION_ADDRESS)
    }

    /// Create a frame source for a controller at a non-default address,
    /// e.g. behind an address translator.
    #[must_use]
    pub fn with_address(i2c: I, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            obfuscated: false,
        }
    }

    /// Decode frames according to the handshake the controller was
    /// initialised with.
    #[must_use]
    pub fn with_handshake(mut self, handshake: Handshake) -> Self {
        self.obfuscated = handshake.obfuscates();
        self
    }

    #[inline]
    #[must_use]
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus and delay.
    pub fn into_inner(self) -> (I, D) {
        (self.i2c, self.delay)
    }
}

impl<I: I2c, D: DelayNs> FrameSource for I2cFrameSource<I, D> {
    async fn read_frame(&mut self, register: u8) -> Result<RawFrame, BusError> {
        self.i2c
            .write(self.address, &[register])
            .await
            .map_err(i2c_error_to_bus_error)?;

        self.delay.delay_ms(POINTER_SETTLE_MS).await;

        let mut buf = [0u8; FRAME_LEN];
        self.i2c
            .read(self.address, &mut buf)
            .await
            .map_err(i2c_error_to_bus_error)?;

        let frame = RawFrame::new(buf);
        Ok(if self.obfuscated {
            frame.decode_legacy()
        } else {
            frame
        })
    }

    async fn write_register(&mut self, register: u8, value: u8) -> Result<(), BusError> {
        self.i2c
            .write(self.address, &[register, value])
            .await
            .map_err(i2c_error_to_bus_error)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::testing::{block_on, MockDelay};
    use embedded_hal::i2c::{ErrorType, NoAcknowledgeSource, Operation};
    use std::collections::VecDeque;
    use std::vec;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockI2cError(ErrorKind);

    impl embedded_hal::i2c::Error for MockI2cError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Records every write and answers reads from a queue.
    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        reads: VecDeque<Result<[u8; FRAME_LEN], ErrorKind>>,
        fail_writes: Option<ErrorKind>,
    }

    impl ErrorType for MockI2c {
        type Error = MockI2cError;
    }

    impl I2c for MockI2c {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some(kind) = self.fail_writes {
                            return Err(MockI2cError(kind));
                        }
                        self.writes.push((address, bytes.to_vec()));
                    }
                    Operation::Read(buf) => {
                        let frame = self
                            .reads
                            .pop_front()
                            .unwrap_or(Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)))
                            .map_err(MockI2cError)?;
                        let len = buf.len();
                        buf.copy_from_slice(&frame[..len]);
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_read_frame_writes_pointer_then_reads() {
        let mut i2c = MockI2c::default();
        i2c.reads.push_back(Ok([1, 2, 3, 4, 5, 6]));
        let mut source = I2cFrameSource::new(i2c, MockDelay::default());

        let frame = block_on(source.read_frame(0x00)).unwrap();
        assert_eq!(frame.bytes(), &[1, 2, 3, 4, 5, 6]);

        let (i2c, delay) = source.into_inner();
        assert_eq!(i2c.writes, vec![(EXTENSION_ADDRESS, vec![0x00])]);
        assert_eq!(delay.total_ms(), u64::from(POINTER_SETTLE_MS));
    }

    #[test]
    fn test_write_register_sends_pair() {
        let mut source = I2cFrameSource::new(MockI2c::default(), MockDelay::default());
        block_on(source.write_register(0xF0, 0x55)).unwrap();
        let (i2c, _) = source.into_inner();
        assert_eq!(i2c.writes, vec![(EXTENSION_ADDRESS, vec![0xF0, 0x55])]);
    }

    #[test]
    fn test_custom_address() {
        let mut i2c = MockI2c::default();
        i2c.reads.push_back(Ok([0; FRAME_LEN]));
        let mut source = I2cFrameSource::with_address(i2c, MockDelay::default(), 0x53);
        assert_eq!(source.address(), 0x53);
        block_on(source.read_frame(0xFA)).unwrap();
        let (i2c, _) = source.into_inner();
        assert_eq!(i2c.writes, vec![(0x53, vec![0xFA])]);
    }

    #[test]
    fn test_nack_maps_to_nack() {
        let i2c = MockI2c {
            fail_writes: Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)),
            ..MockI2c::default()
        };
        let mut source = I2cFrameSource::new(i2c, MockDelay::default());
        assert_eq!(block_on(source.read_frame(0x00)), Err(BusError::Nack));
        assert_eq!(block_on(source.write_register(0xFB, 0x00)), Err(BusError::Nack));
    }

    #[test]
    fn test_other_errors_map_to_bus() {
        let mut i2c = MockI2c::default();
        i2c.reads.push_back(Err(ErrorKind::ArbitrationLoss));
        let mut source = I2cFrameSource::new(i2c, MockDelay::default());
        assert_eq!(block_on(source.read_frame(0x00)), Err(BusError::Bus));
    }

    #[test]
    fn test_legacy_handshake_decodes_frames() {
        let mut i2c = MockI2c::default();
        i2c.reads.push_back(Ok([0x17, 0x00, 0xFF, 0x80, 0x7F, 0xE8]));
        let mut source =
            I2cFrameSource::new(i2c, MockDelay::default()).with_handshake(Handshake::Legacy);
        let frame = block_on(source.read_frame(0x00)).unwrap();
        assert_eq!(frame.bytes(), &[0x17, 0x2E, 0xFF, 0xAE, 0x7F, 0x16]);
    }

    #[test]
    fn test_short_read_conversion() {
        let err: BusError = RawFrame::from_slice(&[0; 3]).unwrap_err().into();
        assert_eq!(err, BusError::ShortRead);
    }
}
