//! ControllerPoller: connects a controller session to a state sink.

use embedded_hal_async::delay::DelayNs;

use crate::bus::{BusError, FrameSource};
use crate::controller::ExtensionController;
use crate::output::{OutputError, StateSink};

/// Polls an [`ExtensionController`] and forwards every reading to a sink.
///
/// # Error Handling
///
/// A failed read is logged and nothing is sent; the sink keeps showing
/// the last good reading until the next successful poll.
pub struct ControllerPoller<S, D, O> {
    controller: ExtensionController<S, D>,
    output: O,
    started: bool,
}

impl<S: FrameSource, D: DelayNs, O: StateSink> ControllerPoller<S, D, O> {
    /// Create a new poller from a connected controller and a sink.
    pub fn new(controller: ExtensionController<S, D>, output: O) -> Self {
        Self {
            controller,
            output,
            started: false,
        }
    }

    /// Poll forever at the controller's poll interval.
    ///
    /// Every failed cycle is handed to `on_error` before waiting for the
    /// next one. This method never returns under normal operation.
    pub async fn run<F: FnMut(PollError)>(&mut self, mut on_error: F) -> ! {
        loop {
            self.cycle(&mut on_error).await;
        }
    }

    /// One iteration of [`run`](Self::run).
    async fn cycle<F: FnMut(PollError)>(&mut self, on_error: &mut F) {
        if let Err(e) = self.process_one().await {
            on_error(e);
        }
        self.controller.wait_next_poll().await;
    }

    /// Poll once and forward the reading to the sink.
    ///
    /// The sink is started on the first call and again after a failed
    /// start. Returns the result of the operation for testing purposes.
    pub async fn process_one(&mut self) -> Result<(), PollError> {
        if !self.started {
            if let Err(e) = self.output.start(self.controller.family()).await {
                error!("Sink start failed: {:?}", e);
                return Err(PollError::Output(e));
            }
            self.started = true;
        }

        match self.controller.poll().await {
            Ok(reading) => {
                if let Err(e) = self.output.send(&reading).await {
                    error!("Sink send failed: {:?}", e);
                    return Err(PollError::Output(e));
                }
                Ok(())
            }
            Err(e) => {
                warn!("Poll failed: {:?}", e);
                Err(PollError::Bus(e))
            }
        }
    }

    /// Re-run identification and restart the sink for the new family.
    ///
    /// # Errors
    ///
    /// Returns the bus error if identification fails; the session and
    /// the sink are left as they were.
    pub async fn reidentify(&mut self) -> Result<(), PollError> {
        self.controller.reidentify().await.map_err(PollError::Bus)?;
        self.started = false;
        Ok(())
    }

    pub fn controller(&self) -> &ExtensionController<S, D> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ExtensionController<S, D> {
        &mut self.controller
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Decompose the poller into its controller and sink.
    pub fn into_parts(self) -> (ExtensionController<S, D>, O) {
        (self.controller, self.output)
    }
}

/// Error type for poll operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollError {
    /// Error from the controller bus.
    Bus(BusError),
    /// Error from the state sink.
    Output(OutputError),
}
