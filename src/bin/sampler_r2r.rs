#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use panic_halt as _;
use r2r_sampler::board::A0Input;
use r2r_sampler::config::BAUD_RATE;
use r2r_sampler::{Error, R2rLadder, Sampler, SamplerConfig};

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    // serial interface (8N1)
    let serial = arduino_hal::default_serial!(dp, pins, BAUD_RATE);

    // A0 ← waveform generator
    let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
    let a0 = pins.a0.into_analog_input(&mut adc);

    // D2 (LSB) .. D9 (MSB) → R-2R ladder → scope
    let ladder = R2rLadder::new([
        pins.d2.into_output().downgrade(),
        pins.d3.into_output().downgrade(),
        pins.d4.into_output().downgrade(),
        pins.d5.into_output().downgrade(),
        pins.d6.into_output().downgrade(),
        pins.d7.into_output().downgrade(),
        pins.d8.into_output().downgrade(),
        pins.d9.into_output().downgrade(),
    ]);

    let mut sampler = Sampler::new(
        A0Input::new(adc, a0),
        ladder,
        serial,
        arduino_hal::Delay::new(),
        SamplerConfig::default(),
    );

    loop {
        sampler.step().map_err(Error::into_infallible).unwrap_infallible();
    }
}
