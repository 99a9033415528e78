// Rust guideline compliant 2026-10-17

//! CSV adapter for the `ScoreSink` port.
//!
//! Writes one row per scored customer: `ID,HISTORY_TIER,RELIABILITY,BAD_CLIENT`,
//! with the bad-client label as `0`/`1` so it can be used directly as a
//! training target. The header is written on construction, so an empty run
//! still produces a well-formed file.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use domain::{ScoreSink, ScoredCustomer, SinkError};
use serde::Serialize;

const HEADER: [&str; 4] = ["ID", "HISTORY_TIER", "RELIABILITY", "BAD_CLIENT"];

#[derive(Debug, Serialize)]
struct ScoreRow<'a> {
    id: &'a str,
    history_tier: u8,
    reliability: u8,
    bad_client: u8,
}

fn unavailable(e: &impl fmt::Display) -> SinkError {
    SinkError::Unavailable { reason: format!("csv write failed: {e}") }
}

/// `ScoreSink` adapter writing CSV rows to any `Write` target.
pub struct CsvScoreSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> fmt::Debug for CsvScoreSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvScoreSink").finish_non_exhaustive()
    }
}

impl CsvScoreSink<File> {
    /// Create (or truncate) the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Unavailable`] when the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SinkError::Unavailable {
            reason: format!("cannot create {}: {e}", path.display()),
        })?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvScoreSink<W> {
    /// Wrap `inner` and write the header row.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Unavailable`] if the header cannot be written.
    pub fn from_writer(inner: W) -> Result<Self, SinkError> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(HEADER).map_err(|e| unavailable(&e))?;
        Ok(Self { writer })
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Unavailable`] if the final flush fails.
    #[cfg(test)]
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer.into_inner().map_err(|e| unavailable(&e))
    }
}

impl<W: Write> ScoreSink for CsvScoreSink<W> {
    /// Append one row per customer and flush.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Unavailable`] on any serialization or I/O failure.
    fn write_batch(&mut self, batch: Vec<ScoredCustomer>) -> Result<(), SinkError> {
        for customer in &batch {
            self.writer
                .serialize(ScoreRow {
                    id: customer.id.as_str(),
                    history_tier: customer.history_tier,
                    reliability: customer.reliability,
                    bad_client: u8::from(customer.bad_client),
                })
                .map_err(|e| unavailable(&e))?;
        }
        self.writer.flush().map_err(|e| unavailable(&e))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
