//! Arduino Uno peripherals behind the sampler's traits.

use arduino_hal::hal::port::PC0;
use arduino_hal::port::mode::Analog;
use arduino_hal::port::Pin;
use arduino_hal::Adc;

use crate::sample::Sample;
use crate::sampler::AnalogInput;

/// A0 with the ADC that converts it.
pub struct A0Input {
    adc: Adc,
    pin: Pin<Analog, PC0>,
}

impl A0Input {
    pub fn new(adc: Adc, pin: Pin<Analog, PC0>) -> Self {
        Self { adc, pin }
    }
}

impl AnalogInput for A0Input {
    fn read(&mut self) -> Sample {
        Sample::new(self.pin.analog_read(&mut self.adc)) // ← blocks for one conversion (~104us @ 16MHz/128)
    }
}
