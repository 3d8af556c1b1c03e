#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;
use wii_ext_firmware::{
    ControllerPoller, DefmtDisplay, ExtensionController, I2cFrameSource, PollError,
    CONTROLLER_CONFIG, I2C_FREQUENCY,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Wii extension reader starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- I2C Setup ---
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY;

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_5, // SCL
        p.PIN_4, // SDA
        Irqs,
        i2c_config,
    );

    // On-board LED: solid when no controller answers, toggles on poll errors
    let led = Output::new(p.PIN_25, Level::Low);

    match poll_task(i2c, led) {
        Ok(token) => spawner.spawn(token),
        Err(_) => error!("Failed to spawn poll task"),
    }
}

/// Poll task - identifies the controller, then polls it forever.
#[embassy_executor::task]
async fn poll_task(i2c: I2c<'static, I2C0, Async>, mut led: Output<'static>) {
    let source = I2cFrameSource::new(i2c, Delay).with_handshake(CONTROLLER_CONFIG.handshake);

    let controller = match ExtensionController::connect(source, Delay, CONTROLLER_CONFIG).await {
        Ok(controller) => controller,
        Err(e) => {
            error!("No controller found: {:?}", e);
            led.set_high();
            return;
        }
    };
    info!(
        "Polling every {=u32} ms",
        controller.poll_interval_ms()
    );

    // Sink failures are logged by the poller
    let mut poller = ControllerPoller::new(controller, DefmtDisplay::new());
    poller
        .run(|e: PollError| {
            if let PollError::Bus(_) = e {
                led.toggle();
            }
        })
        .await
}
