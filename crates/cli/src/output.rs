//! Result output.
//!
//! Results go to stdout through a locked writer so they stay separate from
//! log lines on stderr.

use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliError;

/// Writes command results in the configured format.
pub struct Output<W> {
    format: OutputFormat,
    writer: W,
}

impl Output<io::StdoutLock<'static>> {
    /// Output bound to the process stdout.
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout().lock())
    }
}

impl<W: Write> Output<W> {
    pub const fn new(format: OutputFormat, writer: W) -> Self {
        Self { format, writer }
    }

    /// Write one result: `text` in text mode, `value` as a JSON line otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn emit<T: Serialize>(&mut self, text: &str, value: &T) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{text}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, value)?;
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
