//! Build-time constants shared by the firmware and the host tools.

/// USART symbol rate, both firmware variants.
pub const BAUD_RATE: u32 = 115200;

/// Pause at the end of every iteration. The iteration body adds to it, so the effective
/// rate stays at or below 1 kHz.
pub const SAMPLE_INTERVAL_US: u32 = 1000;

/// Largest value the 10-bit ADC produces.
pub const ADC_MAX: u16 = 1023;

/// Largest ladder code.
pub const CODE_MAX: u8 = 255;

/// Number of ladder lines (one per code bit).
pub const LADDER_WIDTH: usize = 8;

/// Digital pin carrying bit 0 of the ladder code. Bits 1..7 follow on D3..D9.
pub const FIRST_LADDER_PIN: u8 = 2;

/// Samples kept by the host-side window (power of two for the FFT on the far end).
pub const HOST_WINDOW: usize = 512;

/// Rate the host assumes when turning sample indices into time.
pub const HOST_SAMPLE_RATE_HZ: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub sample_interval_us: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_interval_us: SAMPLE_INTERVAL_US,
        }
    }
}

impl SamplerConfig {
    /// Nominal sample rate implied by the interval alone.
    pub const fn nominal_rate_hz(&self) -> u32 {
        if self.sample_interval_us == 0 {
            return u32::MAX;
        }
        1_000_000 / self.sample_interval_us
    }
}
