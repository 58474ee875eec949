#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use panic_halt as _;
use r2r_sampler::board::A0Input;
use r2r_sampler::config::BAUD_RATE;
use r2r_sampler::{Error, Passthrough, Sampler, SamplerConfig};

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    // serial interface (8N1)
    let serial = arduino_hal::default_serial!(dp, pins, BAUD_RATE);

    // A0 ← waveform generator
    let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
    let a0 = pins.a0.into_analog_input(&mut adc);

    let mut sampler = Sampler::new(
        A0Input::new(adc, a0),
        Passthrough,
        serial,
        arduino_hal::Delay::new(),
        SamplerConfig::default(),
    );

    loop {
        sampler.step().map_err(Error::into_infallible).unwrap_infallible();
    }
}
