//! Button bitfields for the Nunchuck and Classic controller families.
//!
//! Each family gets its own set type so that a Nunchuck `C` can never be
//! mixed up with a Classic button at compile time. Both sets share the
//! [`ButtonSet`] trait, which is what the repeat tracker works on.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Common behaviour of the per-family button bitfields.
pub trait ButtonSet:
    Copy + Default + PartialEq + BitAnd<Output = Self> + BitOr<Output = Self>
{
}

macro_rules! button_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$flag_meta:meta])*
                const $flag:ident = $bit:expr;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name(pub u16);

        impl $name {
            $(
                $(#[$flag_meta])*
                pub const $flag: Self = Self(1 << $bit);
            )+

            /// No buttons pressed.
            pub const NONE: Self = Self(0);

            /// Every button of the set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$flag),+];

            /// Check if the given button(s) are pressed.
            #[inline]
            #[must_use]
            pub const fn contains(self, button: Self) -> bool {
                (self.0 & button.0) == button.0
            }

            /// Check if the given button is pressed (alias for contains).
            #[inline]
            #[must_use]
            pub const fn is_pressed(self, button: Self) -> bool {
                self.contains(button)
            }

            /// Set or clear button(s).
            #[inline]
            pub fn set(&mut self, button: Self, pressed: bool) {
                if pressed {
                    self.0 |= button.0;
                } else {
                    self.0 &= !button.0;
                }
            }

            /// Get the raw u16 value.
            #[inline]
            #[must_use]
            pub const fn raw(self) -> u16 {
                self.0
            }

            /// Check if no buttons are pressed.
            #[inline]
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Number of buttons pressed.
            #[inline]
            #[must_use]
            pub const fn count(self) -> u32 {
                self.0.count_ones()
            }
        }

        impl ButtonSet for $name {}

        impl BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self::Output {
                Self(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self::Output {
                Self(self.0 & rhs.0)
            }
        }

        impl BitAndAssign for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }
    };
}

button_set! {
    /// Nunchuck buttons: the two physical buttons plus four joystick
    /// pseudo-buttons.
    ///
    /// # Example
    ///
    /// ```
    /// use wii_ext_proto::NunchuckButtons;
    ///
    /// let buttons = NunchuckButtons::C | NunchuckButtons::XL;
    /// assert!(buttons.contains(NunchuckButtons::C));
    /// assert!(!buttons.contains(NunchuckButtons::Z));
    /// ```
    pub struct NunchuckButtons {
        const C = 0;
        const Z = 1;
        /// Joystick pushed fully left.
        const XL = 2;
        /// Joystick pushed fully right.
        const XR = 3;
        /// Joystick pushed fully up.
        const YU = 4;
        /// Joystick pushed fully down.
        const YD = 5;
    }
}

button_set! {
    /// Classic controller buttons.
    ///
    /// `LT` and `RT` are the digital end-stop switches of the analog
    /// triggers, reported independently of the trigger positions.
    pub struct ClassicButtons {
        const DPAD_UP = 0;
        const DPAD_DOWN = 1;
        const DPAD_LEFT = 2;
        const DPAD_RIGHT = 3;
        const A = 4;
        const B = 5;
        const X = 6;
        const Y = 7;
        const MINUS = 8;
        const HOME = 9;
        const PLUS = 10;
        const ZL = 11;
        const ZR = 12;
        const LT = 13;
        const RT = 14;
    }
}
