//! Output stage between the ADC and the serial line.
//!
//! The ladder variant re-encodes every sample on eight digital lines feeding an external
//! R-2R network; the logging variant does nothing here.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use crate::config::LADDER_WIDTH;
use crate::sample::{LadderCode, Sample};

/// What a sampler does with each sample before transmitting it.
pub trait Stage {
    type Error;

    fn apply(&mut self, sample: Sample) -> Result<(), Self::Error>;
}

/// Logging-only build: the sample goes straight to the serial line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Stage for Passthrough {
    type Error = Infallible;

    fn apply(&mut self, _sample: Sample) -> Result<(), Infallible> {
        Ok(())
    }
}

pub struct R2rLadder<P> {
    lines: [P; LADDER_WIDTH] // ← little endian (0-7), line 0 = smallest weight
}

impl<P: OutputPin> R2rLadder<P> {
    /// Lines must already be outputs. Nothing is driven until the first `write`.
    pub fn new(lines: [P; LADDER_WIDTH]) -> Self {
        Self { lines }
    }

    /// Drive line i with bit i of `code`.
    pub fn write(&mut self, code: LadderCode) -> Result<(), P::Error> {
        for (line, bit) in self.lines.iter_mut().zip(code.lines()) {
            line.set_state(PinState::from(bit))?;
        }
        Ok(())
    }

    pub fn release(self) -> [P; LADDER_WIDTH] {
        self.lines
    }
}

impl<P: OutputPin> Stage for R2rLadder<P> {
    type Error = P::Error;

    fn apply(&mut self, sample: Sample) -> Result<(), P::Error> {
        self.write(sample.rescale())
    }
}
