// Rust guideline compliant 2026-10-17

//! Synthetic customer source -- generates random payment histories and
//! serves them through the `CustomerSource` hexagonal port.
//!
//! Used for demo runs without a credit-record export, and as reproducible
//! input for tests. Entry points: [`SyntheticSource::generate_customer`],
//! [`CustomerSource::read_batch`]. Configuration via [`SyntheticConfig::builder`].

use domain::{CustomerId, CustomerSource, RawHistory, SourceError, StatusCode};
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

// ---------------------------------------------------------------------------
// SyntheticError
// ---------------------------------------------------------------------------

/// Errors that can occur while configuring the generator.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The supplied configuration is invalid.
    #[error("invalid synthetic configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// SyntheticConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`SyntheticSource`].
///
/// Construct via [`SyntheticConfig::builder`].
#[derive(Debug)]
pub struct SyntheticConfig {
    /// Total number of customers to generate before signaling exhaustion.
    pub customers: usize,
    /// Longest history generated, in months (range: `[1, max_history]`).
    pub max_history: usize,
    /// Probability that a month carries an overdue status (`0`..`5`).
    pub delinquency_rate: f64,
    /// Optional RNG seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Builder for [`SyntheticConfig`].
///
/// Obtain via [`SyntheticConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct SyntheticConfigBuilder {
    customers: usize,
    max_history: usize,
    delinquency_rate: f64,
    seed: Option<u64>,
}

impl SyntheticConfig {
    /// Create a builder. `customers` is the only required parameter.
    ///
    /// Default values: `max_history = 24`, `delinquency_rate = 0.1`, `seed = None`.
    #[must_use]
    pub fn builder(customers: usize) -> SyntheticConfigBuilder {
        SyntheticConfigBuilder {
            customers,
            // Two years of monthly statements.
            max_history: 24,
            delinquency_rate: 0.1,
            seed: None,
        }
    }
}

impl SyntheticConfigBuilder {
    /// Override the longest generated history.
    #[must_use]
    pub fn max_history(mut self, months: usize) -> Self {
        self.max_history = months;
        self
    }

    /// Override the per-month overdue probability.
    #[must_use]
    pub fn delinquency_rate(mut self, rate: f64) -> Self {
        self.delinquency_rate = rate;
        self
    }

    /// Fix the RNG seed for deterministic output (useful in tests).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::InvalidConfig`] when `max_history` is zero or
    /// `delinquency_rate` is outside `[0, 1]`.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<SyntheticConfig, SyntheticError> {
        if self.max_history == 0 {
            return Err(SyntheticError::InvalidConfig {
                reason: "max_history must be >= 1".to_owned(),
            });
        }
        if !(0.0..=1.0).contains(&self.delinquency_rate) {
            return Err(SyntheticError::InvalidConfig {
                reason: format!("delinquency_rate must be in [0, 1], got {}", self.delinquency_rate),
            });
        }
        Ok(SyntheticConfig {
            customers: self.customers,
            max_history: self.max_history,
            delinquency_rate: self.delinquency_rate,
            seed: self.seed,
        })
    }
}

// ---------------------------------------------------------------------------
// SyntheticSource
// ---------------------------------------------------------------------------

/// Cumulative weights (out of 100) for overdue buckets `0`..`5`.
///
/// Milder buckets dominate, as in real credit records.
const OVERDUE_CUMULATIVE: [(u32, StatusCode); 6] = [
    (55, StatusCode::Overdue0),
    (78, StatusCode::Overdue1),
    (89, StatusCode::Overdue2),
    (94, StatusCode::Overdue3),
    (97, StatusCode::Overdue4),
    (100, StatusCode::Overdue5),
];

/// Share of non-overdue months reported as `C` rather than `X`.
const PAID_OFF_SHARE: f64 = 0.7;

/// Generates random customers on demand and serves them in batches.
#[derive(Debug)]
pub struct SyntheticSource {
    config: SyntheticConfig,
    rng: StdRng,
    generated: usize,
}

impl SyntheticSource {
    /// Create a new source from `config`.
    ///
    /// Seeds the RNG from `config.seed` if set, otherwise from the OS.
    #[must_use]
    pub fn new(config: SyntheticConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng, generated: 0 }
    }

    /// Customers not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.config.customers - self.generated
    }

    /// Generate one customer, independent of the remaining budget.
    ///
    /// The id is a UUID built from RNG bytes so seeded runs are reproducible.
    /// History length is uniform in `[1, config.max_history]`.
    pub fn generate_customer(&mut self) -> RawHistory {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        let id = uuid::Builder::from_random_bytes(bytes).into_uuid();

        let months = self.rng.random_range(1..=self.config.max_history);
        let statuses = (0..months)
            .map(|_| self.random_status().to_string())
            .collect();

        RawHistory { id: CustomerId::new(id.to_string()), statuses }
    }

    fn random_status(&mut self) -> StatusCode {
        if self.rng.random_bool(self.config.delinquency_rate) {
            let roll = self.rng.random_range(0..100u32);
            OVERDUE_CUMULATIVE
                .iter()
                .find(|(limit, _)| roll < *limit)
                .map_or(StatusCode::Overdue5, |&(_, code)| code)
        } else if self.rng.random_bool(PAID_OFF_SHARE) {
            StatusCode::PaidOff
        } else {
            StatusCode::NoLoan
        }
    }
}

impl CustomerSource for SyntheticSource {
    /// Generate up to `max` customers from the remaining budget.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Exhausted`] once `config.customers` have been served.
    fn read_batch(&mut self, max: usize) -> Result<Vec<RawHistory>, SourceError> {
        let size = max.min(self.remaining());
        if size == 0 {
            return Err(SourceError::Exhausted);
        }
        let batch: Vec<RawHistory> = (0..size).map(|_| self.generate_customer()).collect();
        self.generated += size;
        log::debug!("synthetic.batch.generated: size={size} remaining={}", self.remaining());
        Ok(batch)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
