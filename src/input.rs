use std::io::{self, BufRead};

use tracing::debug;

use crate::error::{Error, Result};
use crate::estimator::SampleCount;

/// Parses a single sample count. Surrounding whitespace is ignored; anything
/// that is not a non-negative integer fitting in a `u64` is rejected.
pub fn parse_sample_count(line: &str) -> Result<SampleCount> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("expected a number of points".to_string()));
    }

    let requested: u64 = trimmed
        .parse()
        .map_err(|e| Error::InvalidInput(format!("'{trimmed}': {e}")))?;

    Ok(SampleCount::from_requested(requested))
}

/// Reads the first whitespace-separated token from `reader` and parses it
/// as a sample count. Blank lines before the token are skipped; anything
/// after it is ignored.
pub fn read_sample_count<R: BufRead>(reader: &mut R) -> Result<SampleCount> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                Error::InvalidInput("input is not valid UTF-8".to_string())
            }
            _ => Error::Io(e),
        })?;
        if read == 0 {
            return parse_sample_count("");
        }
        if let Some(token) = line.split_whitespace().next() {
            debug!(input = token, "read sample count");
            return parse_sample_count(token);
        }
    }
}
