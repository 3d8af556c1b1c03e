//! Nunchuck frame layout and decoder.
//!
//! ```text
//!         D7      D6      D5      D4      D3      D2      D1      D0
//! 0.Byte  <------------------------ Joy X [7:0] ------------------------>
//! 1.Byte  <------------------------ Joy Y [7:0] ------------------------>
//! 2.Byte  <----------------------- Accel X [9:2] ----------------------->
//! 3.Byte  <----------------------- Accel Y [9:2] ----------------------->
//! 4.Byte  <----------------------- Accel Z [9:2] ----------------------->
//! 5.Byte  AZ[1]   AZ[0]   AY[1]   AY[0]   AX[1]   AX[0]   C       Z
//! ```
//!
//! `C` and `Z` are low-active.

use crate::buttons::NunchuckButtons;
use crate::frame::RawFrame;
use crate::repeat::RepeatState;

/// Joystick X below this reads as [`NunchuckButtons::XL`].
pub const XL_LIMIT: u8 = 60;
/// Joystick X above this reads as [`NunchuckButtons::XR`].
pub const XR_LIMIT: u8 = 200;
/// Joystick Y above this reads as [`NunchuckButtons::YU`].
pub const YU_LIMIT: u8 = 190;
/// Joystick Y below this reads as [`NunchuckButtons::YD`].
pub const YD_LIMIT: u8 = 60;

/// Three-axis accelerometer reading, 10 bits per axis (0-1023).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

/// Decoded Nunchuck state.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NunchuckState {
    /// Pressed buttons, pseudo-buttons included.
    pub buttons: NunchuckButtons,
    /// Buttons that were also pressed on the previous poll.
    pub repeat: NunchuckButtons,
    pub joy_x: u8,
    pub joy_y: u8,
    pub accel: Acceleration,
}

impl NunchuckState {
    #[inline]
    #[must_use]
    pub const fn is_pressed(&self, button: NunchuckButtons) -> bool {
        self.buttons.contains(button)
    }

    #[inline]
    #[must_use]
    pub const fn is_repeat(&self, button: NunchuckButtons) -> bool {
        self.repeat.contains(button)
    }
}

/// Reassemble one 10-bit accelerometer axis from its high byte and the
/// two low bits stored at `shift` in byte 5.
#[inline]
const fn accel_axis(high: u8, low_bits: u8, shift: u8) -> u16 {
    ((high as u16) << 2) | ((low_bits >> shift) & 0b0000_0011) as u16
}

fn buttons(frame: &RawFrame) -> NunchuckButtons {
    let joy_x = frame[0];
    let joy_y = frame[1];

    let mut buttons = NunchuckButtons::NONE;
    buttons.set(NunchuckButtons::C, frame.low_active(5, 1));
    buttons.set(NunchuckButtons::Z, frame.low_active(5, 0));
    buttons.set(NunchuckButtons::XL, joy_x < XL_LIMIT);
    buttons.set(NunchuckButtons::XR, joy_x > XR_LIMIT);
    buttons.set(NunchuckButtons::YU, joy_y > YU_LIMIT);
    buttons.set(NunchuckButtons::YD, joy_y < YD_LIMIT);
    buttons
}

/// Decode a Nunchuck frame against the previous poll's repeat state.
///
/// Pure: returns the decoded state together with the repeat state for the
/// next poll.
///
/// ```
/// use wii_ext_proto::{nunchuck, NunchuckButtons, RawFrame, RepeatState};
///
/// // Stick centred, C pressed (bit 1 of byte 5 cleared)
/// let frame = RawFrame::new([128, 128, 0x80, 0x80, 0x80, 0b1111_1101]);
/// let (state, repeat) = nunchuck::decode(&frame, RepeatState::new());
/// assert!(state.is_pressed(NunchuckButtons::C));
/// assert!(!state.is_repeat(NunchuckButtons::C));
///
/// let (state, _) = nunchuck::decode(&frame, repeat);
/// assert!(state.is_repeat(NunchuckButtons::C));
/// ```
#[must_use]
pub fn decode(
    frame: &RawFrame,
    prev: RepeatState<NunchuckButtons>,
) -> (NunchuckState, RepeatState<NunchuckButtons>) {
    let buttons = buttons(frame);
    let (repeat, next) = prev.track(buttons);

    let state = NunchuckState {
        buttons,
        repeat,
        joy_x: frame[0],
        joy_y: frame[1],
        accel: Acceleration {
            x: accel_axis(frame[2], frame[5], 2),
            y: accel_axis(frame[3], frame[5], 4),
            z: accel_axis(frame[4], frame[5], 6),
        },
    };
    (state, next)
}

/// Nunchuck decoder owning its repeat state across polls.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NunchuckDecoder {
    repeat: RepeatState<NunchuckButtons>,
}

impl NunchuckDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, frame: &RawFrame) -> NunchuckState {
        let (state, next) = decode(frame, self.repeat);
        self.repeat = next;
        state
    }

    pub fn reset(&mut self) {
        self.repeat.reset();
    }
}
