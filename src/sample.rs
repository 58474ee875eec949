//! Sample and ladder code values.
//!
//! Both live for a single loop iteration and carry their range in the type: a [`Sample`]
//! never exceeds [`ADC_MAX`], a [`LadderCode`] is a plain byte.

use crate::bitops::bits8;
use crate::config::ADC_MAX;

/// One 10-bit ADC conversion result, 0..=1023.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sample(u16);

impl Sample {
    pub const MIN: Sample = Sample(0);
    pub const MAX: Sample = Sample(ADC_MAX);

    /// Wrap a raw conversion result, clamping anything above the 10-bit range.
    pub const fn new(raw: u16) -> Self {
        if raw > ADC_MAX {
            Self(ADC_MAX)
        } else {
            Self(raw)
        }
    }

    /// `None` for values the converter cannot produce.
    pub const fn try_new(raw: u16) -> Option<Self> {
        if raw > ADC_MAX {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Drop the two least significant bits to fit the 8-bit ladder (floor(value / 4)).
    pub const fn rescale(self) -> LadderCode {
        LadderCode((self.0 / 4) as u8)
    }
}

impl From<Sample> for u16 {
    fn from(sample: Sample) -> u16 {
        sample.0
    }
}

impl ufmt::uDisplay for Sample {
    fn fmt<W: ufmt::uWrite + ?Sized>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error> {
        ufmt::uDisplay::fmt(&self.0, f)
    }
}

impl core::fmt::Display for Sample {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 8-bit pattern driven onto the R-2R ladder. Bit 0 has the smallest weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LadderCode(pub u8);

impl LadderCode {
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Line states, index = ladder line.
    pub fn lines(self) -> [bool; 8] {
        bits8(self.0)
    }
}
