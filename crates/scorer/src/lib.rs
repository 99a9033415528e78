// Rust guideline compliant 2026-10-17

//! Reliability scorer component.
//!
//! [`Scorer`] turns raw customer histories into the output contract by
//! delegating the scoring rules to an injected `domain::ReliabilityModel`.
//! The shipped model is [`RuleBasedModel`] in the [`rules`] module.

pub mod rules;

use domain::{CustomerId, CustomerRecord, RawHistory, ReliabilityModel, ScoredCustomer, ScoringError};

pub use rules::{
    MAX_SCORE, RECENT_WINDOW, RecentRule, RuleBasedModel, UnknownRule, history_reliability_tier,
    recent_period_reliability,
};

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

/// A customer that could not be scored, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("customer {id} rejected: {error}")]
pub struct Rejection {
    /// Customer identifier from the raw input.
    pub id: CustomerId,
    /// Why the customer was rejected.
    #[source]
    pub error: ScoringError,
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Pipeline component that scores customers with a `ReliabilityModel`.
///
/// Generic over any model; carries no rule logic of its own.
#[derive(Debug)]
pub struct Scorer<M: ReliabilityModel> {
    model: M,
}

impl<M: ReliabilityModel> Scorer<M> {
    /// Create a scorer wrapping `model`.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// The wrapped model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Validate `raw` and score it.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] carrying `InvalidStatusCode` or `EmptyHistory`.
    pub fn score(&self, raw: RawHistory) -> Result<ScoredCustomer, Rejection> {
        let id = raw.id.clone();
        let record = CustomerRecord::try_from(raw).map_err(|error| Rejection { id, error })?;
        Ok(record.to_scored(&self.model))
    }

    /// Score every customer in `batch`; one result per input, same order.
    ///
    /// A failing customer yields an `Err` entry and never aborts the batch.
    #[must_use]
    pub fn score_batch(&self, batch: Vec<RawHistory>) -> Vec<Result<ScoredCustomer, Rejection>> {
        log::debug!("scorer.score_batch: model={} batch_size={}", self.model.name(), batch.len());
        batch.into_iter().map(|raw| self.score(raw)).collect()
    }
}
