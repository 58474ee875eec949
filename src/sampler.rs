//! The sampling loop: read, stage, transmit, pause. Forever.

use core::convert::Infallible;
use core::fmt;

use embedded_hal::delay::DelayNs;
use ufmt::uWrite;

use crate::config::SamplerConfig;
use crate::ladder::Stage;
use crate::sample::Sample;
use crate::transmit::transmit;

/// A single analog input channel.
///
/// `embedded-hal` 1.0 has no ADC trait; on the board this wraps `arduino_hal::Adc` and the
/// A0 pin. A read cannot fail, the converter saturates at the rails.
pub trait AnalogInput {
    fn read(&mut self) -> Sample;
}

impl<F: FnMut() -> Sample> AnalogInput for F {
    fn read(&mut self) -> Sample {
        self()
    }
}

/// Failure of one of the sampler's outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<S, O> {
    Serial(S),
    Output(O),
}

impl Error<Infallible, Infallible> {
    /// Board peripherals never fail; lets the firmware `unwrap_infallible()`.
    pub fn into_infallible(self) -> Infallible {
        match self {
            Self::Serial(never) | Self::Output(never) => never,
        }
    }
}

impl<S: fmt::Debug, O: fmt::Debug> fmt::Display for Error<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Serial(error) =>
                write!(f, "serial write failed: {:?}", error),
            Self::Output(error) =>
                write!(f, "ladder output failed: {:?}", error),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl<S: fmt::Debug, O: fmt::Debug> std::error::Error for Error<S, O> {}

/// Owns every peripheral the loop touches.
pub struct Sampler<A, St, W, D> {
    input: A,
    stage: St,
    serial: W,
    delay: D,
    config: SamplerConfig,
}

impl<A, St, W, D> Sampler<A, St, W, D>
where
    A: AnalogInput,
    St: Stage,
    W: uWrite,
    D: DelayNs,
{
    pub fn new(input: A, stage: St, serial: W, delay: D, config: SamplerConfig) -> Self {
        log::debug!("sampler ready, interval {} us", config.sample_interval_us);
        Self { input, stage, serial, delay, config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// One iteration. The sample is returned for callers that want to watch the loop.
    pub fn step(&mut self) -> Result<Sample, Error<W::Error, St::Error>> {
        let sample = self.input.read();
        log::trace!("sample {}", sample);

        self.stage.apply(sample).map_err(Error::Output)?;
        transmit(&mut self.serial, sample).map_err(Error::Serial)?;

        self.delay.delay_us(self.config.sample_interval_us);
        Ok(sample)
    }

    /// Iterate until an output fails, which on the board never happens.
    pub fn run(&mut self) -> Result<Infallible, Error<W::Error, St::Error>> {
        loop {
            self.step()?;
        }
    }

    pub fn release(self) -> (A, St, W, D) {
        (self.input, self.stage, self.serial, self.delay)
    }
}
