// Rust guideline compliant 2026-10-17

//! Credit-record CSV adapter for the `CustomerSource` port.
//!
//! Reads the monthly status export (`ID,MONTHS_BALANCE,STATUS`), groups rows
//! by customer in first-seen order, and sorts each customer's months most
//! recent first (`MONTHS_BALANCE` 0 is the current month, -1 the one before).
//! Status values are passed through raw so an invalid code rejects only its
//! own customer.

use std::collections::{HashMap, VecDeque};
use std::io::Read;
use std::path::Path;

use domain::{CustomerId, CustomerSource, RawHistory, SourceError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CreditRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "MONTHS_BALANCE")]
    months_balance: i32,
    #[serde(rename = "STATUS")]
    status: String,
}

/// `CustomerSource` adapter backed by a fully loaded credit-record export.
#[derive(Debug)]
pub struct CreditRecordSource {
    customers: VecDeque<RawHistory>,
}

impl CreditRecordSource {
    /// Open and load the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] when the file cannot be opened or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| SourceError::Unavailable {
            reason: format!("cannot open {}: {e}", path.display()),
        })?;
        Self::from_reader(file)
    }

    /// Load every row from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] on malformed CSV or a non-integer
    /// `MONTHS_BALANCE`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<(i32, String)>)> = Vec::new();
        for row in csv_reader.deserialize::<CreditRow>() {
            let row = row.map_err(|e| SourceError::Unavailable {
                reason: format!("invalid credit record CSV: {e}"),
            })?;
            let slot = *index.entry(row.id.clone()).or_insert_with(|| {
                groups.push((row.id.clone(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push((row.months_balance, row.status));
        }

        let customers: VecDeque<RawHistory> = groups
            .into_iter()
            .map(|(id, mut months)| {
                // Stable: duplicate months keep file order.
                months.sort_by(|a, b| b.0.cmp(&a.0));
                RawHistory {
                    id: CustomerId::new(id),
                    statuses: months.into_iter().map(|(_, status)| status).collect(),
                }
            })
            .collect();

        log::info!("csv_source.loaded: customers={}", customers.len());
        Ok(Self { customers })
    }
}

impl CustomerSource for CreditRecordSource {
    /// Drain up to `max` customers from the front.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Exhausted`] once every customer has been read.
    fn read_batch(&mut self, max: usize) -> Result<Vec<RawHistory>, SourceError> {
        if self.customers.is_empty() {
            return Err(SourceError::Exhausted);
        }
        let count = max.min(self.customers.len());
        Ok(self.customers.drain(..count).collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::CreditRecordSource;
    use domain::{CustomerId, CustomerSource as _, SourceError};

    const SAMPLE: &str = "\
ID,MONTHS_BALANCE,STATUS
5001711,-1,0
5001711,0,X
5001711,-2,0
5001712,0,C
5001712,-1,C
5001711,-3,0
";

    #[test]
    fn groups_by_id_in_first_seen_order() {
        let mut src = CreditRecordSource::from_reader(SAMPLE.as_bytes()).unwrap();
        let batch = src.read_batch(10).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, CustomerId::from("5001711"));
        assert_eq!(batch[1].id, CustomerId::from("5001712"));
    }

    #[test]
    fn months_are_sorted_most_recent_first() {
        let mut src = CreditRecordSource::from_reader(SAMPLE.as_bytes()).unwrap();
        let batch = src.read_batch(1).unwrap();
        assert_eq!(batch[0].statuses, vec!["X", "0", "0", "0"]);
    }

    #[test]
    fn invalid_status_is_kept_raw() {
        let data = "ID,MONTHS_BALANCE,STATUS\n1,0,Q\n";
        let mut src = CreditRecordSource::from_reader(data.as_bytes()).unwrap();
        assert_eq!(src.read_batch(1).unwrap()[0].statuses, vec!["Q"]);
    }

    #[test]
    fn exhausts_after_all_customers() {
        let mut src = CreditRecordSource::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(src.read_batch(1).unwrap().len(), 1);
        assert_eq!(src.read_batch(1).unwrap().len(), 1);
        assert_eq!(src.read_batch(1), Err(SourceError::Exhausted));
    }

    #[test]
    fn malformed_months_balance_is_unavailable() {
        let data = "ID,MONTHS_BALANCE,STATUS\n1,last,C\n";
        let result = CreditRecordSource::from_reader(data.as_bytes());
        assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let result = CreditRecordSource::from_path("/nonexistent/credit_record.csv");
        assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    }
}
