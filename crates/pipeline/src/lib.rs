// Rust guideline compliant 2026-10-17

//! Pipeline component -- reads customer batches from a `CustomerSource`,
//! scores them, and writes the output contract to a `ScoreSink`.
//!
//! Entry points: [`Pipeline::process_once`], [`Pipeline::run`].
//! Configuration via [`PipelineConfig::builder`].

use domain::{CustomerSource, ReliabilityModel, ScoreSink, ScoredCustomer, SinkError, SourceError};
use scorer::{Rejection, Scorer};

/// Number of distinct history tiers (`0..=7`).
pub const TIER_COUNT: usize = 8;

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors that abort a pipeline run.
///
/// Per-customer scoring failures are not errors here; they are reported as
/// [`Rejection`]s and the batch carries on.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The supplied configuration is invalid.
    #[error("invalid pipeline configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A source read failed.
    #[error("source read error: {0}")]
    Read(SourceError),
    /// A sink write failed.
    #[error("sink write error: {0}")]
    Write(SinkError),
}

// ---------------------------------------------------------------------------
// PipelineConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`Pipeline`].
///
/// Construct via [`PipelineConfig::builder`].
#[derive(Debug)]
pub struct PipelineConfig {
    /// Maximum number of customers read per batch.
    pub batch_max: usize,
    /// Optional upper bound on the number of batches. `None` runs until the
    /// source is exhausted.
    pub iterations: Option<u64>,
}

/// Builder for [`PipelineConfig`].
///
/// Obtain via [`PipelineConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct PipelineConfigBuilder {
    batch_max: usize,
    iterations: Option<u64>,
}

impl PipelineConfig {
    /// Create a builder. `batch_max` is the only required parameter.
    ///
    /// Default values: `iterations = None`.
    #[must_use]
    pub fn builder(batch_max: usize) -> PipelineConfigBuilder {
        PipelineConfigBuilder { batch_max, iterations: None }
    }
}

impl PipelineConfigBuilder {
    /// Set a finite batch count. Without this the pipeline runs until the
    /// source signals `Exhausted`.
    #[must_use]
    pub fn iterations(mut self, n: u64) -> Self {
        self.iterations = Some(n);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] when `batch_max` is zero.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<PipelineConfig, PipelineError> {
        if self.batch_max == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "batch_max must be >= 1".to_owned(),
            });
        }
        Ok(PipelineConfig { batch_max: self.batch_max, iterations: self.iterations })
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Outcome of one [`Pipeline::process_once`] call.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Customers scored and written to the sink.
    pub scored: Vec<ScoredCustomer>,
    /// Customers that could not be scored.
    pub rejected: Vec<Rejection>,
}

/// Totals accumulated over a whole [`Pipeline::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Batches processed.
    pub batches: u64,
    /// Customers scored.
    pub scored: usize,
    /// Customers rejected.
    pub rejected: usize,
    /// Scored customers flagged as bad clients.
    pub bad_clients: usize,
    /// Scored customers per history tier, indexed by tier.
    pub tier_histogram: [usize; TIER_COUNT],
}

impl RunSummary {
    /// Fold one batch into the totals.
    pub fn absorb(&mut self, report: &BatchReport) {
        self.batches += 1;
        self.rejected += report.rejected.len();
        for customer in &report.scored {
            self.scored += 1;
            if customer.bad_client {
                self.bad_clients += 1;
            }
            if let Some(slot) = self.tier_histogram.get_mut(usize::from(customer.history_tier)) {
                *slot += 1;
            }
        }
    }

    /// Share of scored customers flagged as bad clients; `0` when none were scored.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
    pub fn bad_client_rate(&self) -> f64 {
        if self.scored == 0 {
            0.0
        } else {
            self.bad_clients as f64 / self.scored as f64
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Reads batches from a source, scores them, and writes results to a sink.
///
/// Generic over the ports for static dispatch. Holds no adapter references;
/// dependencies are injected per call.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline from `config`.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Read one batch, score every customer, and write the scored ones.
    ///
    /// Rejected customers are returned in the report; they never abort the batch.
    /// The sink receives the scored customers in source order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Read`] on source failure (including `Exhausted`),
    /// or [`PipelineError::Write`] on sink failure.
    pub fn process_once<S, M, K>(
        &self,
        source: &mut S,
        scorer: &Scorer<M>,
        sink: &mut K,
    ) -> Result<BatchReport, PipelineError>
    where
        S: CustomerSource,
        M: ReliabilityModel,
        K: ScoreSink,
    {
        let batch = source.read_batch(self.config.batch_max).map_err(PipelineError::Read)?;
        log::debug!("pipeline.batch.read: size={}", batch.len());

        let mut report = BatchReport::default();
        for result in scorer.score_batch(batch) {
            match result {
                Ok(scored) => report.scored.push(scored),
                Err(rejection) => report.rejected.push(rejection),
            }
        }

        sink.write_batch(report.scored.clone()).map_err(PipelineError::Write)?;
        Ok(report)
    }

    /// Run the scoring loop until stopped.
    ///
    /// Calls [`process_once`](Self::process_once) repeatedly. Stops cleanly when:
    /// - the source signals [`SourceError::Exhausted`], or
    /// - `config.iterations` batches have been processed.
    ///
    /// Rejected customers are logged as warnings and counted in the summary.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] for any error other than source `Exhausted`.
    pub fn run<S, M, K>(
        &self,
        source: &mut S,
        scorer: &Scorer<M>,
        sink: &mut K,
    ) -> Result<RunSummary, PipelineError>
    where
        S: CustomerSource,
        M: ReliabilityModel,
        K: ScoreSink,
    {
        let mut summary = RunSummary::default();
        loop {
            match self.process_once(source, scorer, sink) {
                Ok(report) => {
                    for rejection in &report.rejected {
                        log::warn!("pipeline.customer.rejected: {rejection}");
                    }
                    summary.absorb(&report);
                }
                Err(PipelineError::Read(SourceError::Exhausted)) => {
                    log::info!(
                        "pipeline.run.stopped: source exhausted after {} batch(es)",
                        summary.batches
                    );
                    return Ok(summary);
                }
                Err(e) => return Err(e),
            }

            log::info!(
                "pipeline.batch.processed: iteration={} scored={} rejected={}",
                summary.batches,
                summary.scored,
                summary.rejected
            );

            if let Some(max) = self.config.iterations
                && summary.batches >= max
            {
                log::info!("pipeline.run.stopped: iteration limit reached");
                return Ok(summary);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
