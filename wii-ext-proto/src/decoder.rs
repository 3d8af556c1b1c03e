//! Family-selected decoding.

use crate::classic::{ClassicDecoder, ClassicState};
use crate::frame::RawFrame;
use crate::identity::ControllerFamily;
use crate::nunchuck::{NunchuckDecoder, NunchuckState};

/// One decoded poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerReading {
    Nunchuck(NunchuckState),
    Classic(ClassicState),
    /// Undecoded frame from a controller of unknown family.
    Raw(RawFrame),
}

/// Decoder chosen once per session from the controller family.
///
/// Each variant owns the repeat state of its family; building a new
/// `FamilyDecoder` is how that state is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FamilyDecoder {
    Nunchuck(NunchuckDecoder),
    Classic(ClassicDecoder),
    /// Pass-through without button semantics or repeat tracking.
    Raw,
}

impl FamilyDecoder {
    #[must_use]
    pub fn for_family(family: ControllerFamily) -> Self {
        match family {
            ControllerFamily::Nunchuck => Self::Nunchuck(NunchuckDecoder::new()),
            ControllerFamily::Classic => Self::Classic(ClassicDecoder::new()),
            ControllerFamily::Unknown(_) => Self::Raw,
        }
    }

    pub fn decode(&mut self, frame: &RawFrame) -> ControllerReading {
        match self {
            Self::Nunchuck(decoder) => ControllerReading::Nunchuck(decoder.decode(frame)),
            Self::Classic(decoder) => ControllerReading::Classic(decoder.decode(frame)),
            Self::Raw => ControllerReading::Raw(*frame),
        }
    }

    /// Forget the previous poll.
    pub fn reset(&mut self) {
        match self {
            Self::Nunchuck(decoder) => decoder.reset(),
            Self::Classic(decoder) => decoder.reset(),
            Self::Raw => {}
        }
    }
}
