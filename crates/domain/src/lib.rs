// Rust guideline compliant 2026-10-17

//! Shared domain types for the credit reliability scorer.
//!
//! Defines `StatusCode`, `PaymentHistory`, `StatusCounts`, `PayStats`,
//! `CustomerRecord`, `ScoringError`, and the hexagonal port traits:
//! `ReliabilityModel`, `CustomerSource`, and `ScoreSink`.
//! All other crates depend on this one; it depends on no other workspace crate.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while building or scoring a single customer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// A status value outside `{0,1,2,3,4,5,C,X}`.
    #[error("invalid status code: {value:?}")]
    InvalidStatusCode {
        /// The rejected raw value.
        value: String,
    },
    /// The customer has no recorded periods; pay stats are undefined.
    #[error("empty payment history")]
    EmptyHistory,
}

/// Errors from the `CustomerSource` port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source has no more customers to deliver.
    #[error("source exhausted")]
    Exhausted,
    /// The underlying data could not be read or parsed.
    #[error("source unavailable: {reason}")]
    Unavailable {
        /// Human-readable description.
        reason: String,
    },
}

/// Errors from the `ScoreSink` port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    /// The sink backend failed.
    #[error("sink unavailable: {reason}")]
    Unavailable {
        /// Human-readable description.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// StatusCode
// ---------------------------------------------------------------------------

/// One month's payment classification for a credit account.
///
/// `Overdue0` is the mildest delinquency bucket and `Overdue5` the most severe.
/// `PaidOff` is `C` (paid or closed this period), `NoLoan` is `X` (no credit used).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusCode {
    /// `0`
    Overdue0,
    /// `1`
    Overdue1,
    /// `2`
    Overdue2,
    /// `3`
    Overdue3,
    /// `4`
    Overdue4,
    /// `5`
    Overdue5,
    /// `C`
    PaidOff,
    /// `X`
    NoLoan,
}

impl StatusCode {
    /// Number of distinct status codes.
    pub const COUNT: usize = 8;

    /// Every code, in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Overdue0,
        Self::Overdue1,
        Self::Overdue2,
        Self::Overdue3,
        Self::Overdue4,
        Self::Overdue5,
        Self::PaidOff,
        Self::NoLoan,
    ];

    /// Position of this code in per-code arrays (`0..COUNT`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character tag used in credit records.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Overdue0 => '0',
            Self::Overdue1 => '1',
            Self::Overdue2 => '2',
            Self::Overdue3 => '3',
            Self::Overdue4 => '4',
            Self::Overdue5 => '5',
            Self::PaidOff => 'C',
            Self::NoLoan => 'X',
        }
    }

    /// Parse a single-character tag. Case-sensitive: `c` and `x` are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidStatusCode`] for any other character.
    pub fn from_char(c: char) -> Result<Self, ScoringError> {
        match c {
            '0' => Ok(Self::Overdue0),
            '1' => Ok(Self::Overdue1),
            '2' => Ok(Self::Overdue2),
            '3' => Ok(Self::Overdue3),
            '4' => Ok(Self::Overdue4),
            '5' => Ok(Self::Overdue5),
            'C' => Ok(Self::PaidOff),
            'X' => Ok(Self::NoLoan),
            other => Err(ScoringError::InvalidStatusCode { value: other.to_string() }),
        }
    }
}

impl TryFrom<char> for StatusCode {
    type Error = ScoringError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl FromStr for StatusCode {
    type Err = ScoringError;

    /// Parse a status field. Surrounding whitespace is ignored; the remainder
    /// must be exactly one valid tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(ScoringError::InvalidStatusCode { value: s.to_owned() }),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ---------------------------------------------------------------------------
// PaymentHistory
// ---------------------------------------------------------------------------

/// A customer's monthly statuses, index 0 = most recent month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentHistory(Vec<StatusCode>);

impl PaymentHistory {
    /// Parse raw status fields in order, failing on the first invalid value.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidStatusCode`] for the first bad value.
    pub fn parse<I, S>(raw: I) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .map(|s| s.as_ref().parse::<StatusCode>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of recorded periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no period has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recent `min(window, len)` statuses.
    #[must_use]
    pub fn recent(&self, window: usize) -> &[StatusCode] {
        &self.0[..window.min(self.0.len())]
    }

    /// Iterate statuses, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, StatusCode> {
        self.0.iter()
    }
}

impl FromIterator<StatusCode> for PaymentHistory {
    fn from_iter<T: IntoIterator<Item = StatusCode>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PaymentHistory {
    type Item = &'a StatusCode;
    type IntoIter = std::slice::Iter<'a, StatusCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// StatusCounts + PayStats
// ---------------------------------------------------------------------------

/// Occurrences of each status code over a whole history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts([usize; StatusCode::COUNT]);

impl StatusCounts {
    /// Count every code in one pass over `history`.
    #[must_use]
    pub fn from_history(history: &PaymentHistory) -> Self {
        let mut counts = [0usize; StatusCode::COUNT];
        for code in history {
            counts[code.index()] += 1;
        }
        Self(counts)
    }

    /// Occurrences of `code`.
    #[must_use]
    pub fn get(&self, code: StatusCode) -> usize {
        self.0[code.index()]
    }

    /// Sum of all counts (equals the history length).
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(code, count)` pairs in index order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (StatusCode, usize)> + '_ {
        StatusCode::ALL.iter().map(|&code| (code, self.get(code)))
    }
}

/// Fraction of the whole history spent in each status code.
///
/// Every value lies in `[0, 1]` and the eight values sum to 1 within float
/// tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayStats([f64; StatusCode::COUNT]);

impl PayStats {
    /// Build from explicit per-code fractions, in [`StatusCode::ALL`] order.
    ///
    /// Intended for tests and alternative ingestion paths; no normalization
    /// is applied.
    #[must_use]
    pub fn from_fractions(fractions: [f64; StatusCode::COUNT]) -> Self {
        Self(fractions)
    }

    /// Normalize raw counts by their total.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::EmptyHistory`] when the total is zero.
    #[expect(clippy::cast_precision_loss, reason = "history lengths are far below 2^52")]
    pub fn from_counts(counts: &StatusCounts) -> Result<Self, ScoringError> {
        let total = counts.total();
        if total == 0 {
            return Err(ScoringError::EmptyHistory);
        }
        let mut fractions = [0.0_f64; StatusCode::COUNT];
        for (code, count) in counts.iter() {
            fractions[code.index()] = count as f64 / total as f64;
        }
        Ok(Self(fractions))
    }

    /// Fraction of periods in `code`.
    #[must_use]
    pub fn get(&self, code: StatusCode) -> f64 {
        self.0[code.index()]
    }

    /// Sum over all codes.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Per-code frequency distribution of `history`.
///
/// # Errors
///
/// Returns [`ScoringError::EmptyHistory`] when `history` is empty.
pub fn compute_pay_stats(history: &PaymentHistory) -> Result<PayStats, ScoringError> {
    PayStats::from_counts(&StatusCounts::from_history(history))
}

// ---------------------------------------------------------------------------
// ReliabilityScore
// ---------------------------------------------------------------------------

/// Weight of the history tier in the combined score.
pub const HISTORY_WEIGHT: f64 = 0.75;
/// Weight of the recent-period score in the combined score.
pub const RECENT_WEIGHT: f64 = 0.25;
/// Combined reliability strictly below this marks a bad client.
pub const BAD_CLIENT_THRESHOLD: u8 = 5;

/// `floor(tier * 0.75 + recent * 0.25)`. Truncates, never rounds.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "operands are non-negative and bounded by 7"
)]
pub fn combined_reliability(history_tier: u8, recent: f64) -> u8 {
    let weighted = f64::from(history_tier) * HISTORY_WEIGHT + recent * RECENT_WEIGHT;
    weighted.floor() as u8
}

/// `true` when `reliability` is below [`BAD_CLIENT_THRESHOLD`].
#[must_use]
pub fn is_bad_client(reliability: u8) -> bool {
    reliability < BAD_CLIENT_THRESHOLD
}

/// Result of scoring one customer. Fixed once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliabilityScore {
    /// Whole-history tier, `0` (worst) to `7` (best).
    pub history_tier: u8,
    /// Recent-period score, nominally `[0, 7]`.
    pub recent: f64,
    /// Combined reliability.
    pub reliability: u8,
    /// `reliability < 5`.
    pub bad_client: bool,
}

impl ReliabilityScore {
    /// Combine the two partial scores and derive the bad-client flag.
    #[must_use]
    pub fn combine(history_tier: u8, recent: f64) -> Self {
        let reliability = combined_reliability(history_tier, recent);
        Self {
            history_tier,
            recent,
            reliability,
            bad_client: is_bad_client(reliability),
        }
    }
}

// ---------------------------------------------------------------------------
// Customer records
// ---------------------------------------------------------------------------

/// Opaque customer identifier supplied by the ingestion stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(String);

impl CustomerId {
    /// Wrap an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unvalidated customer history as delivered by a `CustomerSource`.
///
/// `statuses` is ordered most recent first; values are checked only when the
/// record is built, so one bad customer never poisons a whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHistory {
    /// Customer identifier.
    pub id: CustomerId,
    /// Raw status fields, most recent first.
    pub statuses: Vec<String>,
}

/// Output contract for one scored customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCustomer {
    /// Customer identifier.
    pub id: CustomerId,
    /// Whole-history tier, `0..=7`.
    pub history_tier: u8,
    /// Combined reliability.
    pub reliability: u8,
    /// Bad-client label.
    pub bad_client: bool,
}

/// One customer with its derived statistics and a one-shot score cache.
///
/// `pay_stats` is computed at construction. The score starts unset and is
/// filled on the first call to [`score`](Self::score); it never changes after
/// that, whichever model is passed later.
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    id: CustomerId,
    history: PaymentHistory,
    counts: StatusCounts,
    pay_stats: PayStats,
    score: OnceLock<ReliabilityScore>,
}

impl CustomerRecord {
    /// Build a record from an ordered history.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::EmptyHistory`] when `history` is empty.
    pub fn new(id: CustomerId, history: PaymentHistory) -> Result<Self, ScoringError> {
        let counts = StatusCounts::from_history(&history);
        let pay_stats = PayStats::from_counts(&counts)?;
        Ok(Self { id, history, counts, pay_stats, score: OnceLock::new() })
    }

    /// Customer identifier.
    #[must_use]
    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Number of recorded periods.
    #[must_use]
    pub fn history_length(&self) -> usize {
        self.history.len()
    }

    /// Raw per-code counts.
    #[must_use]
    pub fn status_counts(&self) -> &StatusCounts {
        &self.counts
    }

    /// Per-code fractions over the whole history.
    #[must_use]
    pub fn pay_stats(&self) -> &PayStats {
        &self.pay_stats
    }

    /// Score the record, computing it with `model` on the first call only.
    pub fn score<M: ReliabilityModel + ?Sized>(&self, model: &M) -> ReliabilityScore {
        *self.score.get_or_init(|| {
            let history_tier = model.history_tier(&self.pay_stats);
            let recent = model.recent_period(&self.history);
            let score = ReliabilityScore::combine(history_tier, recent);
            log::debug!(
                "customer_record.scored: id={} model={} tier={} recent={:.3} reliability={}",
                self.id,
                model.name(),
                score.history_tier,
                score.recent,
                score.reliability
            );
            score
        })
    }

    /// Combined reliability; scores on first access.
    pub fn reliability<M: ReliabilityModel + ?Sized>(&self, model: &M) -> u8 {
        self.score(model).reliability
    }

    /// Bad-client flag; scores on first access.
    pub fn is_bad_client<M: ReliabilityModel + ?Sized>(&self, model: &M) -> bool {
        self.score(model).bad_client
    }

    /// The cached score, or `None` while the record is unscored.
    #[must_use]
    pub fn cached_score(&self) -> Option<ReliabilityScore> {
        self.score.get().copied()
    }

    /// Project the record onto the output contract, scoring it if needed.
    pub fn to_scored<M: ReliabilityModel + ?Sized>(&self, model: &M) -> ScoredCustomer {
        let score = self.score(model);
        ScoredCustomer {
            id: self.id.clone(),
            history_tier: score.history_tier,
            reliability: score.reliability,
            bad_client: score.bad_client,
        }
    }
}

impl TryFrom<RawHistory> for CustomerRecord {
    type Error = ScoringError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = PaymentHistory::parse(&raw.statuses)?;
        Self::new(raw.id, history)
    }
}

impl fmt::Display for CustomerRecord {
    /// Summary line. Shows the score only if it was already computed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} history: {} status:", self.id, self.history.len())?;
        for (code, count) in self.counts.iter().filter(|&(_, n)| n > 0) {
            write!(f, " {code}={count}")?;
        }
        match self.cached_score() {
            Some(s) => write!(
                f,
                " tier: {} recent: {:.2} reliability: {} bad_client: {}",
                s.history_tier, s.recent, s.reliability, s.bad_client
            ),
            None => f.write_str(" (unscored)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: the scoring rules applied to a record.
///
/// `CustomerRecord` depends only on this trait, so alternative rule sets and
/// test doubles can be swapped in without touching the cache logic.
pub trait ReliabilityModel {
    /// Coarse tier from whole-history fractions. Must return a value in `0..=7`.
    fn history_tier(&self, stats: &PayStats) -> u8;

    /// Path-dependent score over the most recent periods.
    fn recent_period(&self, history: &PaymentHistory) -> f64;

    /// Name of this model (e.g. `"RULES-DECAY"`).
    fn name(&self) -> &str;
}

/// Hexagonal port: delivers raw customer histories in batches.
///
/// Implementations signal exhaustion via `SourceError::Exhausted`.
pub trait CustomerSource {
    /// Read up to `max` customers.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Exhausted` when no customer is left, or
    /// `SourceError::Unavailable` when the underlying data cannot be read.
    fn read_batch(&mut self, max: usize) -> Result<Vec<RawHistory>, SourceError>;
}

/// Hexagonal port: consumes the output contract.
pub trait ScoreSink {
    /// Write a batch of scored customers.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Unavailable` when the backend fails.
    fn write_batch(&mut self, batch: Vec<ScoredCustomer>) -> Result<(), SinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // ------------------------------------------------------------------
    // Test helpers
    // ------------------------------------------------------------------

    fn history(tags: &str) -> PaymentHistory {
        PaymentHistory::parse(tags.chars().map(String::from)).unwrap()
    }

    /// Model double that returns fixed values and counts its invocations.
    struct CountingModel {
        tier: u8,
        recent: f64,
        tier_calls: Cell<u32>,
        recent_calls: Cell<u32>,
    }

    impl CountingModel {
        fn new(tier: u8, recent: f64) -> Self {
            Self { tier, recent, tier_calls: Cell::new(0), recent_calls: Cell::new(0) }
        }
    }

    impl ReliabilityModel for CountingModel {
        fn history_tier(&self, _stats: &PayStats) -> u8 {
            self.tier_calls.set(self.tier_calls.get() + 1);
            self.tier
        }

        fn recent_period(&self, _history: &PaymentHistory) -> f64 {
            self.recent_calls.set(self.recent_calls.get() + 1);
            self.recent
        }

        fn name(&self) -> &str {
            "COUNTING"
        }
    }

    // ------------------------------------------------------------------
    // StatusCode
    // ------------------------------------------------------------------

    #[test]
    fn status_code_round_trips_every_tag() {
        for code in StatusCode::ALL {
            assert_eq!(StatusCode::from_char(code.as_char()), Ok(code));
            assert_eq!(code.to_string().parse::<StatusCode>(), Ok(code));
        }
    }

    #[test]
    fn status_code_indices_are_dense() {
        for (i, code) in StatusCode::ALL.iter().enumerate() {
            assert_eq!(code.index(), i);
        }
    }

    #[test]
    fn status_code_rejects_unknown_values() {
        for bad in ["6", "c", "x", "", "CC", "N"] {
            assert!(
                matches!(bad.parse::<StatusCode>(), Err(ScoringError::InvalidStatusCode { .. })),
                "{bad:?} must be rejected"
            );
        }
    }

    #[test]
    fn status_code_trims_whitespace() {
        assert_eq!(" C ".parse::<StatusCode>(), Ok(StatusCode::PaidOff));
    }

    #[test]
    fn invalid_status_error_message() {
        let e = StatusCode::from_char('Z').unwrap_err();
        assert_eq!(e.to_string(), "invalid status code: \"Z\"");
    }

    // ------------------------------------------------------------------
    // PaymentHistory + counts
    // ------------------------------------------------------------------

    #[test]
    fn history_parse_stops_on_first_invalid() {
        let result = PaymentHistory::parse(["0", "C", "7", "Q"]);
        assert_eq!(result, Err(ScoringError::InvalidStatusCode { value: "7".to_owned() }));
    }

    #[test]
    fn recent_window_is_bounded_by_length() {
        let h = history("CC0");
        assert_eq!(h.recent(6).len(), 3);
        let long = history("CCCCCCCC");
        assert_eq!(long.recent(6).len(), 6);
    }

    #[test]
    fn counts_single_pass() {
        let counts = StatusCounts::from_history(&history("CC0X5C"));
        assert_eq!(counts.get(StatusCode::PaidOff), 3);
        assert_eq!(counts.get(StatusCode::Overdue0), 1);
        assert_eq!(counts.get(StatusCode::NoLoan), 1);
        assert_eq!(counts.get(StatusCode::Overdue5), 1);
        assert_eq!(counts.get(StatusCode::Overdue3), 0);
        assert_eq!(counts.total(), 6);
    }

    // ------------------------------------------------------------------
    // PayStats
    // ------------------------------------------------------------------

    #[test]
    #[expect(clippy::float_cmp, reason = "exact binary fractions")]
    fn pay_stats_scenario_values() {
        let stats = compute_pay_stats(&history("CCCCCC00")).unwrap();
        assert_eq!(stats.get(StatusCode::PaidOff), 0.75);
        assert_eq!(stats.get(StatusCode::Overdue0), 0.25);
        assert_eq!(stats.get(StatusCode::Overdue5), 0.0);
    }

    #[test]
    fn pay_stats_sum_to_one() {
        for tags in ["C", "X0123", "5554443332221110CCXX", "0000000", "C1X2C3X4C5"] {
            let stats = compute_pay_stats(&history(tags)).unwrap();
            assert!((stats.sum() - 1.0).abs() < 1e-9, "{tags}: sum={}", stats.sum());
            for code in StatusCode::ALL {
                assert!((0.0..=1.0).contains(&stats.get(code)));
            }
        }
    }

    #[test]
    fn pay_stats_empty_history_is_an_error() {
        let result = compute_pay_stats(&PaymentHistory::default());
        assert_eq!(result, Err(ScoringError::EmptyHistory));
    }

    // ------------------------------------------------------------------
    // Combination + bad-client decision
    // ------------------------------------------------------------------

    #[test]
    fn combined_truncates_instead_of_rounding() {
        // 7*0.75 + 6.99*0.25 = 6.9975 -> 6
        assert_eq!(combined_reliability(7, 6.99), 6);
        assert_eq!(combined_reliability(7, 7.0), 7);
        assert_eq!(combined_reliability(4, 0.0), 3);
        assert_eq!(combined_reliability(6, 7.0), 6);
    }

    #[test]
    fn bad_client_boundary() {
        assert!(is_bad_client(4));
        assert!(!is_bad_client(5));
        let bad = ReliabilityScore::combine(5, 2.0); // 4.25
        assert_eq!(bad.reliability, 4);
        assert!(bad.bad_client);
        let ok = ReliabilityScore::combine(5, 5.0); // 5.0
        assert_eq!(ok.reliability, 5);
        assert!(!ok.bad_client);
    }

    // ------------------------------------------------------------------
    // CustomerRecord
    // ------------------------------------------------------------------

    #[test]
    fn record_rejects_empty_history() {
        let result = CustomerRecord::new(CustomerId::from("1"), PaymentHistory::default());
        assert!(matches!(result, Err(ScoringError::EmptyHistory)));
    }

    #[test]
    fn record_from_raw_rejects_invalid_status() {
        let raw = RawHistory {
            id: CustomerId::from("42"),
            statuses: vec!["C".to_owned(), "9".to_owned()],
        };
        let result = CustomerRecord::try_from(raw);
        assert!(matches!(result, Err(ScoringError::InvalidStatusCode { .. })));
    }

    #[test]
    fn record_accessors() {
        let record = CustomerRecord::new(CustomerId::from("5008804"), history("CC0X")).unwrap();
        assert_eq!(record.id().as_str(), "5008804");
        assert_eq!(record.history_length(), 4);
        assert_eq!(record.status_counts().get(StatusCode::PaidOff), 2);
        assert!((record.pay_stats().get(StatusCode::NoLoan) - 0.25).abs() < 1e-12);
        assert!(record.cached_score().is_none());
    }

    #[test]
    fn score_is_computed_once() {
        let model = CountingModel::new(6, 7.0);
        let record = CustomerRecord::new(CustomerId::from("1"), history("CCCCCC00")).unwrap();

        let first = record.reliability(&model);
        let second = record.reliability(&model);
        let bad = record.is_bad_client(&model);

        assert_eq!(first, 6);
        assert_eq!(first, second);
        assert!(!bad);
        assert_eq!(model.tier_calls.get(), 1, "history tier must be computed once");
        assert_eq!(model.recent_calls.get(), 1, "recent period must be computed once");
    }

    #[test]
    fn score_is_fixed_after_first_access() {
        let record = CustomerRecord::new(CustomerId::from("1"), history("C")).unwrap();
        let first = record.score(&CountingModel::new(7, 7.0));
        let other = CountingModel::new(0, 0.0);
        let second = record.score(&other);
        assert_eq!(first, second);
        assert_eq!(other.tier_calls.get(), 0);
    }

    #[test]
    fn to_scored_projects_output_contract() {
        let model = CountingModel::new(4, 0.0);
        let record = CustomerRecord::new(CustomerId::from("9"), history("2C")).unwrap();
        let scored = record.to_scored(&model);
        assert_eq!(
            scored,
            ScoredCustomer {
                id: CustomerId::from("9"),
                history_tier: 4,
                reliability: 3,
                bad_client: true,
            }
        );
    }

    #[test]
    fn display_does_not_force_scoring() {
        let record = CustomerRecord::new(CustomerId::from("7"), history("CC0")).unwrap();
        let text = record.to_string();
        assert_eq!(text, "ID: 7 history: 3 status: 0=1 C=2 (unscored)");
        assert!(record.cached_score().is_none());

        record.score(&CountingModel::new(6, 7.0));
        let text = record.to_string();
        assert!(text.contains("reliability: 6"), "{text}");
        assert!(text.contains("bad_client: false"), "{text}");
    }

    #[test]
    fn port_errors_display() {
        assert_eq!(SourceError::Exhausted.to_string(), "source exhausted");
        let e = SinkError::Unavailable { reason: "disk full".into() };
        assert_eq!(e.to_string(), "sink unavailable: disk full");
    }
}
