// Rust guideline compliant 2026-10-17

//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use scorer::RecentRule;

/// Score credit-card customers as reliable or bad clients from their
/// monthly payment-status history.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Credit-record CSV (`ID,MONTHS_BALANCE,STATUS`). Synthetic customers are
    /// generated when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write scores to this CSV file instead of the log.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Recent-period rule for statuses 1, 0 and C: `decay` or `reset`.
    #[arg(long, default_value_t = RecentRule::Decay)]
    pub rule: RecentRule,

    /// Customers scored per batch.
    #[arg(long, default_value_t = 500)]
    pub batch_size: usize,

    /// Synthetic customers to generate (ignored with --input).
    #[arg(long, default_value_t = 1_000)]
    pub customers: usize,

    /// RNG seed for synthetic customers (ignored with --input).
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["credit_scoring"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert_eq!(args.rule, RecentRule::Decay);
        assert_eq!(args.batch_size, 500);
        assert_eq!(args.customers, 1_000);
        assert!(args.seed.is_none());
    }

    #[test]
    fn parses_rule_and_paths() {
        let args = Args::try_parse_from([
            "credit_scoring",
            "--input",
            "credit_record.csv",
            "-o",
            "scores.csv",
            "--rule",
            "reset",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("credit_record.csv")));
        assert_eq!(args.output, Some(PathBuf::from("scores.csv")));
        assert_eq!(args.rule, RecentRule::Reset);
    }

    #[test]
    fn rejects_unknown_rule() {
        assert!(Args::try_parse_from(["credit_scoring", "--rule", "linear"]).is_err());
    }
}
