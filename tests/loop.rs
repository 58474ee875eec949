use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use ufmt::uWrite;

use r2r_sampler::bitops::comp8;
use r2r_sampler::stream::{parse_line, SampleStream};
use r2r_sampler::{Passthrough, R2rLadder, Sample, Sampler, SamplerConfig};

/// Output line whose level can be observed after it is moved into the ladder.
#[derive(Clone, Default)]
struct Line(Rc<Cell<bool>>);

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

fn lines() -> [Line; 8] {
    core::array::from_fn(|_| Line::default())
}

fn read_bank(bank: &[Line; 8]) -> u8 {
    comp8(core::array::from_fn(|i| bank[i].0.get()))
}

#[derive(Default)]
struct Wire(Vec<u8>);

impl uWrite for Wire {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Shared view of the serial line, drained between iterations.
#[derive(Clone, Default)]
struct Tap(Rc<RefCell<String>>);

impl Tap {
    fn take(&self) -> String {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl uWrite for Tap {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.borrow_mut().push_str(s);
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

struct Sleep;

impl DelayNs for Sleep {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// 10 Hz triangle spanning the full converter range, sampled once per call.
fn triangle() -> impl FnMut() -> Sample {
    let mut phase = 0u32;
    move || {
        let t = phase % 100;
        phase += 1;
        let level = if t < 50 { t * 1023 / 50 } else { (100 - t) * 1023 / 50 };
        Sample::new(level as u16)
    }
}

#[test]
fn test_every_sample_drives_ladder_and_line() {
    let bank = lines();
    let wire = Tap::default();
    let mut raw = 0..=1023u16;
    let input = move || Sample::new(raw.next().unwrap());
    let mut sampler = Sampler::new(input, R2rLadder::new(bank.clone()), wire.clone(), NoDelay, SamplerConfig::default());

    for s in 0..=1023u16 {
        assert_eq!(sampler.step().unwrap(), Sample::new(s));
        assert_eq!(read_bank(&bank), (s / 4) as u8);
        assert_eq!(wire.take(), format!("{}\r\n", s));
    }
}

#[test]
fn test_boundaries() {
    for (raw, code, line) in [(0, 0x00, "0\r\n"), (4, 0x01, "4\r\n"), (1020, 0xFF, "1020\r\n"), (1023, 0xFF, "1023\r\n")] {
        let bank = lines();
        let mut sampler = Sampler::new(move || Sample::new(raw), R2rLadder::new(bank.clone()), Wire::default(), NoDelay, SamplerConfig::default());
        sampler.step().unwrap();
        assert_eq!(read_bank(&bank), code);
        let (_, _, wire, _) = sampler.release();
        assert_eq!(wire.0, line.as_bytes());
    }
}

#[test]
fn test_same_input_same_output() {
    let bank = lines();
    let mut sampler = Sampler::new(|| Sample::new(733), R2rLadder::new(bank.clone()), Wire::default(), NoDelay, SamplerConfig::default());
    sampler.step().unwrap();
    let first = read_bank(&bank);
    sampler.step().unwrap();
    assert_eq!(read_bank(&bank), first);
    let (_, _, wire, _) = sampler.release();
    assert_eq!(wire.0, b"733\r\n733\r\n");
}

#[test]
fn test_variants_transmit_identically() {
    let mut ladder = Sampler::new(triangle(), R2rLadder::new(lines()), Wire::default(), NoDelay, SamplerConfig::default());
    let mut plain = Sampler::new(triangle(), Passthrough, Wire::default(), NoDelay, SamplerConfig::default());
    for _ in 0..500 {
        assert_eq!(ladder.step().unwrap(), plain.step().unwrap());
    }
    let (_, _, ladder_wire, _) = ladder.release();
    let (_, _, plain_wire, _) = plain.release();
    assert_eq!(ladder_wire.0, plain_wire.0);
}

#[test]
fn test_one_second_of_sampling() {
    let mut sampler = Sampler::new(triangle(), R2rLadder::new(lines()), Wire::default(), Sleep, SamplerConfig::default());
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(1) {
        sampler.step().unwrap();
    }
    let (_, _, wire, _) = sampler.release();

    let text = String::from_utf8(wire.0).unwrap();
    assert!(text.lines().all(|line| parse_line(line).is_some()));

    let mut stream = SampleStream::new(text.as_bytes());
    let count = stream.by_ref().map(|s| s.unwrap()).count();
    assert_eq!(stream.dropped(), 0);
    // pause is a lower bound, so never more than 1 kHz
    assert!(count <= 1001, "{} samples", count);
    assert!(count >= 250, "{} samples", count);
}
