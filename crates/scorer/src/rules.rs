// Rust guideline compliant 2026-10-17

//! Rule-based reliability model.
//!
//! Two partial scores feed the combined reliability: a whole-history tier
//! (threshold cascade over pay-stat fractions) and a recent-period score
//! (bounded recurrence over the last six statuses).

use std::fmt;
use std::str::FromStr;

use domain::{PayStats, PaymentHistory, ReliabilityModel, StatusCode};

/// Number of most-recent periods examined by [`recent_period_reliability`].
pub const RECENT_WINDOW: usize = 6;

/// Best possible partial score.
pub const MAX_SCORE: f64 = 7.0;

/// Error returned when parsing an unknown [`RecentRule`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown recent-period rule {name:?} (expected \"decay\" or \"reset\")")]
pub struct UnknownRule {
    /// The rejected name.
    pub name: String,
}

/// Update rule applied to statuses `1`, `0` and `C` in the recent window.
///
/// The other statuses behave identically under both rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecentRule {
    /// Multiplicative growth capped per status, with decay on `1`.
    #[default]
    Decay,
    /// Fixed value per status: `1` -> 3, `0` -> 5, `C` -> 6.
    Reset,
}

impl RecentRule {
    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decay => "decay",
            Self::Reset => "reset",
        }
    }
}

impl FromStr for RecentRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decay" => Ok(Self::Decay),
            "reset" => Ok(Self::Reset),
            _ => Err(UnknownRule { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for RecentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// History tier
// ---------------------------------------------------------------------------

/// Whole-history tier, `0` (worst) to `7` (best).
///
/// Ordered cascade, first match wins: a small share of a severe code outweighs
/// any amount of milder ones.
#[must_use]
pub fn history_reliability_tier(stats: &PayStats) -> u8 {
    let f = |code| stats.get(code);
    if f(StatusCode::Overdue5) > 0.05 {
        0
    } else if f(StatusCode::Overdue4) > 0.05 {
        1
    } else if f(StatusCode::Overdue3) > 0.10 {
        2
    } else if f(StatusCode::Overdue3) > 0.05 || f(StatusCode::Overdue2) > 0.15 {
        3
    } else if f(StatusCode::Overdue2) > 0.05 || f(StatusCode::Overdue1) > 0.15 {
        4
    } else if f(StatusCode::Overdue1) > 0.05 || f(StatusCode::Overdue0) > 0.15 {
        5
    } else if f(StatusCode::Overdue0) > 0.05 || f(StatusCode::PaidOff) < 0.70 {
        6
    } else {
        7
    }
}

// ---------------------------------------------------------------------------
// Recent period
// ---------------------------------------------------------------------------

/// `score * factor` when that stays strictly below `cap`.
fn grow(score: f64, factor: f64, cap: f64) -> Option<f64> {
    let candidate = score * factor;
    (candidate < cap).then_some(candidate)
}

/// Score over the most recent [`RECENT_WINDOW`] statuses, starting at 7.
///
/// Statuses are folded most recent first, so the result depends on their
/// order, not only on their counts. Any `4` or `5` in the window returns 0
/// immediately.
#[must_use]
pub fn recent_period_reliability(history: &PaymentHistory, rule: RecentRule) -> f64 {
    let mut score = MAX_SCORE;
    for &status in history.recent(RECENT_WINDOW) {
        score = match (status, rule) {
            (StatusCode::Overdue5 | StatusCode::Overdue4, _) => return 0.0,
            (StatusCode::Overdue3, _) => 1.0,
            (StatusCode::Overdue2, _) => score * 0.35,
            (StatusCode::Overdue1, RecentRule::Decay) => {
                grow(score, 1.1, 3.0).unwrap_or(score * 0.65)
            }
            (StatusCode::Overdue0, RecentRule::Decay) => grow(score, 1.2, 5.0).unwrap_or(score),
            (StatusCode::PaidOff, RecentRule::Decay) => grow(score, 1.25, 6.0).unwrap_or(score),
            (StatusCode::Overdue1, RecentRule::Reset) => 3.0,
            (StatusCode::Overdue0, RecentRule::Reset) => 5.0,
            (StatusCode::PaidOff, RecentRule::Reset) => 6.0,
            (StatusCode::NoLoan, _) => grow(score, 1.35, MAX_SCORE).unwrap_or(MAX_SCORE),
        };
    }
    score
}

// ---------------------------------------------------------------------------
// RuleBasedModel
// ---------------------------------------------------------------------------

/// Concrete adapter for the `domain::ReliabilityModel` port.
///
/// Stateless apart from the selected [`RecentRule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedModel {
    rule: RecentRule,
}

impl RuleBasedModel {
    /// Create a model using `rule` for the recent-period score.
    #[must_use]
    pub fn new(rule: RecentRule) -> Self {
        Self { rule }
    }

    /// The configured recent-period rule.
    #[must_use]
    pub fn rule(&self) -> RecentRule {
        self.rule
    }
}

impl ReliabilityModel for RuleBasedModel {
    fn history_tier(&self, stats: &PayStats) -> u8 {
        history_reliability_tier(stats)
    }

    fn recent_period(&self, history: &PaymentHistory) -> f64 {
        recent_period_reliability(history, self.rule)
    }

    /// `"RULES-DECAY"` or `"RULES-RESET"`.
    fn name(&self) -> &str {
        match self.rule {
            RecentRule::Decay => "RULES-DECAY",
            RecentRule::Reset => "RULES-RESET",
        }
    }
}
