//! Waveform sampler for an Arduino Uno with an optional R-2R ladder output.
//!
//! Every iteration of the sampler reads A0, optionally re-encodes the reading on an 8-bit
//! resistor ladder and prints the raw reading as one decimal line on the serial port:
//!
//! ```text
//!  A0 ──> AnalogInput ──> Sample ──┬──> Stage (R2rLadder / Passthrough) ──> D2..D9
//!                                  └──> transmit ──> USART "512\r\n"
//! ```
//!
//! The hardware seams are `embedded-hal` / `ufmt` traits so the loop runs unchanged on the
//! board and against fakes on the host. The `std` feature adds the host-side [`stream`]
//! decoder used by the capture tool.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bitops;
pub mod config;
pub mod ladder;
pub mod sample;
pub mod sampler;
pub mod transmit;

#[cfg(feature = "std")]
pub mod stream;

#[cfg(feature = "board")]
pub mod board;

pub use ladder::{Passthrough, R2rLadder, Stage};
pub use sample::{LadderCode, Sample};
pub use sampler::{AnalogInput, Error, Sampler};
pub use config::SamplerConfig;
