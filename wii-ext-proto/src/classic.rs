//! Classic controller frame layout and decoder.
//!
//! ```text
//!         D7      D6      D5      D4      D3      D2      D1      D0
//! 0.Byte  <--RX[4:3]----> <--------------LX[5:0]------------------------>
//! 1.Byte  <--RX[2:1]----> <--------------LY[5:0]------------------------>
//! 2.Byte  RX[0]   <--LT[4:3]----> <--------------RY[4:0]---------------->
//! 3.Byte  <------LT[2:0]--------> <--------------RT[4:0]---------------->
//! 4.Byte  BDR     BDD     BLT     B-      BH      B+      BRT     1
//! 5.Byte  BZL     BB      BY      BA      BX      BZR     BDL     BDU
//! ```
//!
//! All button bits in bytes 4 and 5 are low-active.

use crate::buttons::ClassicButtons;
use crate::frame::RawFrame;
use crate::repeat::RepeatState;

/// Wire position of every Classic button: `(button, byte, bit)`.
pub const BUTTON_BITS: [(ClassicButtons, usize, u8); 15] = [
    (ClassicButtons::DPAD_RIGHT, 4, 7),
    (ClassicButtons::DPAD_DOWN, 4, 6),
    (ClassicButtons::LT, 4, 5),
    (ClassicButtons::MINUS, 4, 4),
    (ClassicButtons::HOME, 4, 3),
    (ClassicButtons::PLUS, 4, 2),
    (ClassicButtons::RT, 4, 1),
    (ClassicButtons::ZL, 5, 7),
    (ClassicButtons::B, 5, 6),
    (ClassicButtons::Y, 5, 5),
    (ClassicButtons::A, 5, 4),
    (ClassicButtons::X, 5, 3),
    (ClassicButtons::ZR, 5, 2),
    (ClassicButtons::DPAD_LEFT, 5, 1),
    (ClassicButtons::DPAD_UP, 5, 0),
];

/// Analog stick position in raw controller units.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stick {
    pub x: u8,
    pub y: u8,
}

/// Decoded Classic controller state.
///
/// Left stick axes are 6 bits (0-63); right stick axes and both triggers
/// are 5 bits (0-31).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassicState {
    pub buttons: ClassicButtons,
    /// Buttons that were also pressed on the previous poll.
    pub repeat: ClassicButtons,
    pub left_stick: Stick,
    pub right_stick: Stick,
    pub left_trigger: u8,
    pub right_trigger: u8,
}

impl ClassicState {
    #[inline]
    #[must_use]
    pub const fn is_pressed(&self, button: ClassicButtons) -> bool {
        self.buttons.contains(button)
    }

    #[inline]
    #[must_use]
    pub const fn is_repeat(&self, button: ClassicButtons) -> bool {
        self.repeat.contains(button)
    }
}

/// Right stick X: RX[4:3] from byte 0, RX[2:1] from byte 1, RX[0] from byte 2.
#[inline]
const fn right_stick_x(b0: u8, b1: u8, b2: u8) -> u8 {
    ((b0 >> 3) & 0b0001_1000) | ((b1 >> 5) & 0b0000_0110) | ((b2 >> 7) & 0b0000_0001)
}

/// Left trigger: LT[4:3] from byte 2, LT[2:0] from byte 3.
#[inline]
const fn left_trigger(b2: u8, b3: u8) -> u8 {
    ((b2 >> 2) & 0b0001_1000) | ((b3 >> 5) & 0b0000_0111)
}

fn buttons(frame: &RawFrame) -> ClassicButtons {
    BUTTON_BITS
        .iter()
        .fold(ClassicButtons::NONE, |mut buttons, &(button, byte, bit)| {
            buttons.set(button, frame.low_active(byte, bit));
            buttons
        })
}

/// Decode a Classic controller frame against the previous poll's repeat
/// state.
///
/// ```
/// use wii_ext_proto::{classic, ClassicButtons, RawFrame, RepeatState};
///
/// // D-pad up pressed (bit 0 of byte 5 cleared), everything else released
/// let frame = RawFrame::new([0x20, 0x20, 0x10, 0x00, 0xFF, 0xFE]);
/// let (state, repeat) = classic::decode(&frame, RepeatState::new());
/// assert_eq!(state.buttons, ClassicButtons::DPAD_UP);
/// assert!(state.repeat.is_empty());
///
/// let (state, _) = classic::decode(&frame, repeat);
/// assert!(state.is_repeat(ClassicButtons::DPAD_UP));
/// ```
#[must_use]
pub fn decode(
    frame: &RawFrame,
    prev: RepeatState<ClassicButtons>,
) -> (ClassicState, RepeatState<ClassicButtons>) {
    let buttons = buttons(frame);
    let (repeat, next) = prev.track(buttons);

    let state = ClassicState {
        buttons,
        repeat,
        left_stick: Stick {
            x: frame[0] & 0b0011_1111,
            y: frame[1] & 0b0011_1111,
        },
        right_stick: Stick {
            x: right_stick_x(frame[0], frame[1], frame[2]),
            y: frame[2] & 0b0001_1111,
        },
        left_trigger: left_trigger(frame[2], frame[3]),
        right_trigger: frame[3] & 0b0001_1111,
    };
    (state, next)
}

/// Classic decoder owning its repeat state across polls.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassicDecoder {
    repeat: RepeatState<ClassicButtons>,
}

impl ClassicDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, frame: &RawFrame) -> ClassicState {
        let (state, next) = decode(frame, self.repeat);
        self.repeat = next;
        state
    }

    pub fn reset(&mut self) {
        self.repeat.reset();
    }
}
