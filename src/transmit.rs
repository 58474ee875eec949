//! Serial wire format: one decimal sample per line, CR LF terminated.

use ufmt::{uWrite, uwriteln};

use crate::sample::Sample;

/// Write `sample` as e.g. `"517\r\n"`. Blocks as long as the transport does.
pub fn transmit<W: uWrite>(serial: &mut W, sample: Sample) -> Result<(), W::Error> {
    uwriteln!(serial, "{}\r", sample)
}
