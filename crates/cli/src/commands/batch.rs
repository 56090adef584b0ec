//! Batch classification of tracking numbers.
//!
//! Reads one tracking number per line from a file or stdin. Blank lines and
//! lines starting with `#` are skipped.
//!
//! # Usage
//!
//! ```bash
//! cs-cli batch shipments.txt
//! cat shipments.txt | cs-cli batch --json
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crystal_shipping_core::{ShippingProvider, parse_tracking_number};

use crate::error::CliError;
use crate::output::Output;

/// Result for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntry {
    Valid {
        line: usize,
        tracking_number: String,
        provider: ShippingProvider,
        tracking_url: String,
    },
    Invalid {
        line: usize,
        input: String,
        error: String,
    },
}

impl BatchEntry {
    fn to_text(&self) -> String {
        match self {
            Self::Valid {
                line,
                tracking_number,
                provider,
                tracking_url,
            } => format!(
                "{line}: {tracking_number} {} {tracking_url}",
                provider.display_name()
            ),
            Self::Invalid { line, input, error } => format!("{line}: {input} ERROR {error}"),
        }
    }
}

/// Counts over a whole batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines that parsed as tracking numbers.
    pub valid: usize,
    /// Lines that failed validation.
    pub invalid: usize,
    /// Valid lines per provider tag.
    pub by_provider: BTreeMap<&'static str, usize>,
}

impl BatchSummary {
    fn record(&mut self, entry: &BatchEntry) {
        match entry {
            BatchEntry::Valid { provider, .. } => {
                self.valid += 1;
                *self.by_provider.entry(provider.as_str()).or_default() += 1;
            }
            BatchEntry::Invalid { .. } => self.invalid += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

/// Classify a single input line, or `None` if it should be skipped.
#[must_use]
pub fn classify_line(line_number: usize, line: &str) -> Option<BatchEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    Some(match parse_tracking_number(trimmed) {
        Ok(info) => BatchEntry::Valid {
            line: line_number,
            tracking_number: info.tracking_number,
            provider: info.provider,
            tracking_url: info.tracking_url,
        },
        Err(e) => BatchEntry::Invalid {
            line: line_number,
            input: trimmed.to_owned(),
            error: e.to_string(),
        },
    })
}

/// Classify every line from `reader`, writing one result per line.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn classify_lines<R: BufRead, W: Write>(
    reader: R,
    out: &mut Output<W>,
) -> Result<BatchSummary, CliError> {
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(entry) = classify_line(index + 1, &line) else {
            continue;
        };
        if let BatchEntry::Invalid { line, error, .. } = &entry {
            warn!(line, error = %error, "Invalid tracking number");
        }
        summary.record(&entry);
        out.emit(&entry.to_text(), &entry)?;
    }

    Ok(summary)
}

/// Run the batch command over `path`, or stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read, output fails, or any line
/// held an invalid tracking number.
pub fn run<W: Write>(path: Option<&Path>, out: &mut Output<W>) -> Result<(), CliError> {
    let summary = match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            info!(path = %path.display(), "Classifying tracking numbers from file");
            classify_lines(BufReader::new(File::open(path)?), out)?
        }
        None => {
            info!("Classifying tracking numbers from stdin");
            classify_lines(io::stdin().lock(), out)?
        }
    };

    info!(
        total = summary.total(),
        valid = summary.valid,
        invalid = summary.invalid,
        "Batch complete"
    );
    for (provider, count) in &summary.by_provider {
        info!(provider, count, "Provider count");
    }

    if summary.invalid > 0 {
        return Err(CliError::BatchHadInvalid(summary.invalid, summary.total()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use crate::config::OutputFormat;

    use super::*;

    const INPUT: &str = "\
# morning pickup
1Z999AA10123456784

9400 1118 9922 3197 4284 90
AB-12345
  EA123456789US
";

    #[test]
    fn test_classify_line_skips_blank_and_comments() {
        assert_eq!(classify_line(1, ""), None);
        assert_eq!(classify_line(1, "   "), None);
        assert_eq!(classify_line(1, "  # note"), None);
    }

    #[test]
    fn test_classify_line_valid() {
        let entry = classify_line(3, " T1234567890 ").unwrap();
        assert_eq!(
            entry,
            BatchEntry::Valid {
                line: 3,
                tracking_number: "T1234567890".to_owned(),
                provider: ShippingProvider::Ups,
                tracking_url: "https://www.ups.com/track?tracknum=T1234567890".to_owned(),
            }
        );
    }

    #[test]
    fn test_classify_line_invalid() {
        let entry = classify_line(7, "abc").unwrap();
        assert_eq!(
            entry,
            BatchEntry::Invalid {
                line: 7,
                input: "abc".to_owned(),
                error: "Tracking number is too short".to_owned(),
            }
        );
    }

    #[test]
    fn test_classify_lines_summary() {
        let mut out = Output::new(OutputFormat::Text, Vec::new());
        let summary = classify_lines(Cursor::new(INPUT), &mut out).unwrap();

        assert_eq!(summary.valid, 3);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.by_provider.get("ups"), Some(&1));
        assert_eq!(summary.by_provider.get("usps"), Some(&2));

        let text = String::from_utf8(out.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines.first().copied(),
            Some("2: 1Z999AA10123456784 UPS https://www.ups.com/track?tracknum=1Z999AA10123456784")
        );
        assert_eq!(
            lines.get(2).copied(),
            Some("5: AB-12345 ERROR Tracking number contains invalid characters")
        );
    }

    #[test]
    fn test_classify_lines_json() {
        let mut out = Output::new(OutputFormat::Json, Vec::new());
        classify_lines(Cursor::new("PRO12345\n!!!!!\n"), &mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(values.len(), 2);
        let (first, second) = (values.first().unwrap(), values.get(1).unwrap());
        assert_eq!(first["status"], "valid");
        assert_eq!(first["provider"], "ups");
        assert_eq!(second["status"], "invalid");
        assert_eq!(second["error"], "Tracking number contains invalid characters");
    }
}
