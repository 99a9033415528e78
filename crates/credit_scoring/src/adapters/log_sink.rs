// Rust guideline compliant 2026-10-17

//! Log adapter for the `ScoreSink` port.
//!
//! Emits one structured `tracing` event per scored customer: `info` for
//! reliable customers, `warn` for bad clients. Always returns `Ok(())`.

use domain::{ScoreSink, ScoredCustomer, SinkError};

/// `ScoreSink` adapter used when no output file is requested.
#[derive(Debug, Default)]
pub struct LogSink {
    written: usize,
}

impl LogSink {
    /// Create a new log sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Customers logged so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl ScoreSink for LogSink {
    fn write_batch(&mut self, batch: Vec<ScoredCustomer>) -> Result<(), SinkError> {
        for customer in &batch {
            if customer.bad_client {
                tracing::warn!(
                    customer_id = %customer.id,
                    history_tier = customer.history_tier,
                    reliability = customer.reliability,
                    "log_sink.bad_client"
                );
            } else {
                tracing::info!(
                    customer_id = %customer.id,
                    history_tier = customer.history_tier,
                    reliability = customer.reliability,
                    "log_sink.reliable"
                );
            }
        }
        self.written += batch.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LogSink;
    use domain::{CustomerId, ScoreSink as _, ScoredCustomer};

    #[test]
    fn counts_every_customer() {
        let mut sink = LogSink::new();
        let batch = vec![
            ScoredCustomer { id: CustomerId::from("1"), history_tier: 7, reliability: 7, bad_client: false },
            ScoredCustomer { id: CustomerId::from("2"), history_tier: 0, reliability: 0, bad_client: true },
        ];
        sink.write_batch(batch).unwrap();
        sink.write_batch(vec![]).unwrap();
        assert_eq!(sink.written(), 2);
    }
}
