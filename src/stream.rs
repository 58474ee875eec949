//! Host side of the serial link.
//!
//! Decodes the line stream the firmware prints the same way the analysis program on the PC
//! does: lines that are not plain digits (boot noise, half lines after a reconnect) are
//! dropped, everything else becomes a [`Sample`]. A [`SampleWindow`] keeps the most recent
//! samples for the FFT on the far end.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::config::HOST_WINDOW;
use crate::sample::Sample;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(io_error) =>
                write!(f, "serial stream I/O error: {}", io_error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(io_error) => Some(io_error),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parse one line of the wire format, `None` if it is not a sample.
pub fn parse_line(line: &str) -> Option<Sample> {
    let digits = line.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // all digits, so the only possible failure is overflow
    digits.parse::<u16>().ok().and_then(Sample::try_new)
}

/// Iterator over the samples in a line stream. Ends at EOF.
pub struct SampleStream<R> {
    reader: R,
    line: String,
    accepted: u64,
    dropped: u64,
}

impl<R: BufRead> SampleStream<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: String::new(), accepted: 0, dropped: 0 }
    }

    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Next sample, `Ok(None)` at EOF.
    pub fn next_sample(&mut self) -> Result<Option<Sample>> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return Ok(None),
                Ok(_) => (),
                // garbage bytes on the wire; same as an unparseable line
                Err(error) if error.kind() == io::ErrorKind::InvalidData => {
                    self.dropped += 1;
                    continue
                }
                Err(error) => return Err(error.into()),
            }
            match parse_line(&self.line) {
                Some(sample) => {
                    self.accepted += 1;
                    return Ok(Some(sample))
                }
                None => {
                    log::debug!("dropping line {:?}", self.line);
                    self.dropped += 1;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for SampleStream<R> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sample().transpose()
    }
}

/// The most recent `capacity` samples, oldest first.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new(HOST_WINDOW)
    }
}

impl SampleWindow {
    /// A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { samples: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<Sample> {
        self.samples.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.samples.iter().copied()
    }

    /// DC level of the window, the host removes it before the FFT.
    pub fn mean(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: u64 = self.samples.iter().map(|s| s.value() as u64).sum();
        Some(sum as f32 / self.samples.len() as f32)
    }
}

/// Samples per second over consecutive reporting periods.
#[derive(Debug)]
pub struct RateMeter {
    period: Duration,
    started: Instant,
    count: u64,
}

impl RateMeter {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    pub fn starting_at(period: Duration, started: Instant) -> Self {
        Self { period, started, count: 0 }
    }

    /// Count one sample; once a period has elapsed returns the rate over it and restarts.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.count += 1;
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < self.period || elapsed.is_zero() {
            return None;
        }
        let rate = self.count as f32 / elapsed.as_secs_f32();
        self.started = now;
        self.count = 0;
        Some(rate)
    }
}

/// Totals of one [`capture`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureStats {
    pub accepted: u64,
    pub dropped: u64,
}

/// Copy every sample in `reader` to `out`, one per line, until EOF.
///
/// Logs the rate, window mean and dropped-line count once per `report_period`.
pub fn capture<R: BufRead, W: Write>(reader: R, mut out: W, report_period: Duration) -> Result<CaptureStats> {
    let mut stream = SampleStream::new(reader);
    let mut window = SampleWindow::default();
    let mut meter = RateMeter::new(report_period);
    while let Some(sample) = stream.next_sample()? {
        writeln!(out, "{}", sample)?;
        window.push(sample);
        if let Some(rate) = meter.tick(Instant::now()) {
            out.flush()?;
            log::info!("{:.0} samples/s, mean {:.1} over {}, {} dropped",
                rate, window.mean().unwrap_or_default(), window.len(), stream.dropped());
        }
    }
    out.flush()?;
    log::info!("end of stream: {} samples, {} dropped", stream.accepted(), stream.dropped());
    Ok(CaptureStats { accepted: stream.accepted(), dropped: stream.dropped() })
}
