use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::time::Duration;

use r2r_sampler::stream;

const REPORT_PERIOD: Duration = Duration::from_secs(1);

fn main() -> stream::Result<()> {
    env_logger::init();
    let stdout = BufWriter::new(io::stdout().lock());
    match std::env::args_os().nth(1) {
        // e.g. /dev/ttyACM0 after `stty -F /dev/ttyACM0 115200 raw`
        Some(path) => {
            log::info!("reading from {}", path.to_string_lossy());
            stream::capture(BufReader::new(File::open(path)?), stdout, REPORT_PERIOD)?;
        }
        None => {
            stream::capture(io::stdin().lock(), stdout, REPORT_PERIOD)?;
        }
    }
    Ok(())
}
