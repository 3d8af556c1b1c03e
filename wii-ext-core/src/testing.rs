//! Host-side test helpers: a blocking executor and bus/delay mocks.

extern crate std;

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;
use wii_ext_proto::RawFrame;

use crate::bus::{BusError, FrameSource};

/// Run a future to completion (simple blocking executor).
///
/// Every mock in this module completes immediately, so a `Pending` poll
/// means a test is waiting on something that will never happen.
pub fn block_on<F: Future>(mut f: F) -> F::Output {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut cx = Context::from_waker(&waker);

    // SAFETY: We don't move f after pinning
    let mut f = unsafe { Pin::new_unchecked(&mut f) };

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {
                panic!("Mock future returned Pending unexpectedly");
            }
        }
    }
}

/// Delay that returns immediately and adds up what it was asked to wait.
#[derive(Debug, Default)]
pub struct MockDelay {
    total_ns: u64,
    calls: usize,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }
}

/// Frame source answering from a queue and recording every access.
#[derive(Debug, Default)]
pub struct MockSource {
    /// Responses for `read_frame`, in order. Empty means NACK.
    pub frames: VecDeque<Result<RawFrame, BusError>>,
    /// Registers passed to `read_frame`.
    pub reads: Vec<u8>,
    /// `(register, value)` pairs passed to `write_register`.
    pub writes: Vec<(u8, u8)>,
    /// Fail every register write with this error.
    pub fail_writes: Option<BusError>,
}

impl MockSource {
    pub fn with_frames<const N: usize>(frames: [Result<RawFrame, BusError>; N]) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Source whose identification frame reports `id_byte` in byte 5.
    pub fn identifying_as(id_byte: u8) -> Self {
        Self::with_frames([Ok(RawFrame::new([0x00, 0x00, 0xA4, 0x20, id_byte, id_byte]))])
    }

    pub fn push_frame(&mut self, bytes: [u8; 6]) {
        self.frames.push_back(Ok(RawFrame::new(bytes)));
    }

    pub fn push_error(&mut self, error: BusError) {
        self.frames.push_back(Err(error));
    }
}

impl FrameSource for MockSource {
    fn read_frame(&mut self, register: u8) -> impl Future<Output = Result<RawFrame, BusError>> {
        self.reads.push(register);
        let result = self.frames.pop_front().unwrap_or(Err(BusError::Nack));
        core::future::ready(result)
    }

    fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> impl Future<Output = Result<(), BusError>> {
        let result = match self.fail_writes {
            Some(error) => Err(error),
            None => {
                self.writes.push((register, value));
                Ok(())
            }
        };
        core::future::ready(result)
    }
}
