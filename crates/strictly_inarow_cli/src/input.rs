//! Line-based input from a terminal or any other reader.

use std::io::BufRead;
use strictly_inarow::InputProvider;
use tracing::{instrument, warn};

/// Reads one line per prompt from `R`.
///
/// End of input and read errors both close the provider.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputProvider for LineInput<R> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                None
            }
        }
    }
}
