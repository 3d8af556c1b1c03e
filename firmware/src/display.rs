//! defmt rendering of controller readings.
//!
//! Each reading is logged as a block of lines laid out like a small
//! character display: a header per family printed once, then buttons,
//! sticks and the family-specific analog values on every poll. Buttons
//! print as `1` (pressed) or `0`; buttons held since the previous poll
//! are listed on a separate line.

use defmt::info;
use heapless::String;
use wii_ext_core::{
    ClassicButtons, ClassicState, ControllerFamily, ControllerReading, NunchuckButtons,
    NunchuckState, OutputError, RawFrame, StateSink,
};

/// Capacity for the held-buttons line; fits every Classic label.
const HELD_LINE_LEN: usize = 64;

const NUNCHUCK_LABELS: [(NunchuckButtons, &str); 6] = [
    (NunchuckButtons::C, "C"),
    (NunchuckButtons::Z, "Z"),
    (NunchuckButtons::XL, "XL"),
    (NunchuckButtons::XR, "XR"),
    (NunchuckButtons::YU, "YU"),
    (NunchuckButtons::YD, "YD"),
];

const CLASSIC_LABELS: [(ClassicButtons, &str); 15] = [
    (ClassicButtons::DPAD_LEFT, "BDL"),
    (ClassicButtons::DPAD_RIGHT, "BDR"),
    (ClassicButtons::DPAD_UP, "BDU"),
    (ClassicButtons::DPAD_DOWN, "BDD"),
    (ClassicButtons::Y, "BY"),
    (ClassicButtons::X, "BX"),
    (ClassicButtons::B, "BB"),
    (ClassicButtons::A, "BA"),
    (ClassicButtons::MINUS, "B-"),
    (ClassicButtons::HOME, "BH"),
    (ClassicButtons::PLUS, "B+"),
    (ClassicButtons::ZL, "BZL"),
    (ClassicButtons::ZR, "BZR"),
    (ClassicButtons::LT, "BLT"),
    (ClassicButtons::RT, "BRT"),
];

/// [`StateSink`] that logs every reading through defmt.
#[derive(Debug, Default)]
pub struct DefmtDisplay {
    family: Option<ControllerFamily>,
}

impl DefmtDisplay {
    #[must_use]
    pub const fn new() -> Self {
        Self { family: None }
    }

    /// Family announced by the last [`StateSink::start`].
    #[inline]
    #[must_use]
    pub fn family(&self) -> Option<ControllerFamily> {
        self.family
    }
}

impl StateSink for DefmtDisplay {
    async fn start(&mut self, family: ControllerFamily) -> Result<(), OutputError> {
        match family {
            ControllerFamily::Nunchuck => info!("======== Wii - Nunchuck ========"),
            ControllerFamily::Classic => info!("==== Wii - Classic - Controller ===="),
            ControllerFamily::Unknown(code) => {
                info!("==== unknown Wii controller ====");
                info!("Controller-ID: {=u16:#06x}", code);
            }
        }
        self.family = Some(family);
        Ok(())
    }

    async fn send(&mut self, reading: &ControllerReading) -> Result<(), OutputError> {
        match reading {
            ControllerReading::Nunchuck(state) => show_nunchuck(state),
            ControllerReading::Classic(state) => show_classic(state),
            ControllerReading::Raw(frame) => show_raw(frame),
        }
        Ok(())
    }
}

fn show_nunchuck(state: &NunchuckState) {
    let b = |button| u8::from(state.is_pressed(button));
    info!("Buttons");
    info!(" C: {=u8}      Z: {=u8}", b(NunchuckButtons::C), b(NunchuckButtons::Z));
    info!("XL: {=u8}     XR: {=u8}", b(NunchuckButtons::XL), b(NunchuckButtons::XR));
    info!("YU: {=u8}     YD: {=u8}", b(NunchuckButtons::YU), b(NunchuckButtons::YD));
    info!("Joystick");
    info!(" x: {=u8}    y: {=u8}", state.joy_x, state.joy_y);
    info!("Acceleration");
    info!(
        " x: {=u16}   y: {=u16}  z: {=u16}",
        state.accel.x,
        state.accel.y,
        state.accel.z
    );
    let held = held_line(NUNCHUCK_LABELS.iter().map(|&(button, label)| {
        (state.is_repeat(button), label)
    }));
    info!("Held: {=str}", held.as_str());
}

fn show_classic(state: &ClassicState) {
    let b = |button| u8::from(state.is_pressed(button));
    info!("Buttons");
    info!(
        " BDL: {=u8}  BDR: {=u8}  BDU: {=u8}  BDD: {=u8}",
        b(ClassicButtons::DPAD_LEFT),
        b(ClassicButtons::DPAD_RIGHT),
        b(ClassicButtons::DPAD_UP),
        b(ClassicButtons::DPAD_DOWN)
    );
    info!(
        "  BY: {=u8}   BX: {=u8}   BB: {=u8}   BA: {=u8}",
        b(ClassicButtons::Y),
        b(ClassicButtons::X),
        b(ClassicButtons::B),
        b(ClassicButtons::A)
    );
    info!(
        "  B-: {=u8}   BH: {=u8}   B+: {=u8}",
        b(ClassicButtons::MINUS),
        b(ClassicButtons::HOME),
        b(ClassicButtons::PLUS)
    );
    info!(
        " BZL: {=u8}  BZR: {=u8}  BLT: {=u8}  BRT: {=u8}",
        b(ClassicButtons::ZL),
        b(ClassicButtons::ZR),
        b(ClassicButtons::LT),
        b(ClassicButtons::RT)
    );
    info!("Joysticks");
    info!("  lx: {=u8}   ly: {=u8}", state.left_stick.x, state.left_stick.y);
    info!("  rx: {=u8}   ry: {=u8}", state.right_stick.x, state.right_stick.y);
    info!("Trigger");
    info!("  lt: {=u8}   rt: {=u8}", state.left_trigger, state.right_trigger);
    let held = held_line(CLASSIC_LABELS.iter().map(|&(button, label)| {
        (state.is_repeat(button), label)
    }));
    info!("Held: {=str}", held.as_str());
}

fn show_raw(frame: &RawFrame) {
    for (index, row) in frame.binary_rows().iter().enumerate() {
        info!("{=usize}.: {}", index, row);
    }
}

/// Space-separated labels of every held button, `-` if none.
fn held_line<'a>(buttons: impl Iterator<Item = (bool, &'a str)>) -> String<HELD_LINE_LEN> {
    let mut line = String::new();
    for (_, label) in buttons.filter(|&(held, _)| held) {
        if !line.is_empty() {
            let _ = line.push(' ');
        }
        let _ = line.push_str(label);
    }
    if line.is_empty() {
        let _ = line.push('-');
    }
    line
}
