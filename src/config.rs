//! Fixed rule tables and batch processing configuration.
//!
//! The scoring rules are deliberately immutable: thresholds and deltas are
//! constants of the rating model, constructed once at startup and cached
//! behind [`get_scoring_rules`]. Only the batch orchestration knobs
//! ([`BatchConfig`]) are adjustable, and those exist for tests and callers
//! that need sequential execution, not for tuning the model.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Lowest credit score the schema accepts
pub const CREDIT_SCORE_MIN: i64 = 300;
/// Highest credit score the schema accepts
pub const CREDIT_SCORE_MAX: i64 = 850;

/// Portfolios larger than this switch to proportional batch sizing
pub const LARGE_PORTFOLIO_THRESHOLD: usize = 1000;
/// Fixed batch size for small portfolios
pub const SMALL_PORTFOLIO_BATCH_SIZE: usize = 100;
/// Batch count target for large portfolios (length / 10 per batch)
pub const LARGE_PORTFOLIO_BATCH_DIVISOR: usize = 10;

/// Immutable rule table for per-record scoring and portfolio rating.
///
/// All thresholds are expressed the way the rating model states them:
/// ratio cutoffs in percent, credit cutoffs as raw scores, deltas as the
/// signed contribution each rule adds to the risk accumulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Loan-to-value percentage above which the high delta applies
    pub ltv_high_pct: f64,
    /// Loan-to-value percentage above which the elevated delta applies
    pub ltv_elevated_pct: f64,
    /// Debt-to-income percentage above which the high delta applies
    pub dti_high_pct: f64,
    /// Debt-to-income percentage above which the elevated delta applies
    pub dti_elevated_pct: f64,
    /// Delta for a ratio above the high cutoff
    pub high_ratio_delta: i32,
    /// Delta for a ratio above the elevated cutoff (and at or below high)
    pub elevated_ratio_delta: i32,

    /// Credit score at or above which the strong-credit delta applies
    pub strong_credit_cutoff: i64,
    /// Credit score below which the weak-credit delta applies
    pub weak_credit_cutoff: i64,
    /// Delta for strong credit (negative: reduces risk)
    pub strong_credit_delta: i32,
    /// Delta for weak credit
    pub weak_credit_delta: i32,

    /// Delta for a fixed-rate loan (negative: reduces risk)
    pub fixed_loan_delta: i32,
    /// Delta for an adjustable-rate loan
    pub adjustable_loan_delta: i32,
    /// Delta for a condo property; single-family contributes nothing
    pub condo_delta: i32,

    /// Highest adjusted total still rated AAA
    pub aaa_ceiling: i64,
    /// Highest adjusted total still rated BBB; above is C
    pub bbb_ceiling: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            ltv_high_pct: 90.0,
            ltv_elevated_pct: 80.0,
            dti_high_pct: 50.0,
            dti_elevated_pct: 40.0,
            high_ratio_delta: 2,
            elevated_ratio_delta: 1,
            strong_credit_cutoff: 700,
            weak_credit_cutoff: 650,
            strong_credit_delta: -1,
            weak_credit_delta: 1,
            fixed_loan_delta: -1,
            adjustable_loan_delta: 1,
            condo_delta: 1,
            aaa_ceiling: 2,
            bbb_ceiling: 5,
        }
    }
}

/// Cache the rule table
static SCORING_RULES: OnceLock<ScoringRules> = OnceLock::new();

/// Get the fixed scoring rules
pub fn get_scoring_rules() -> &'static ScoringRules {
    SCORING_RULES.get_or_init(ScoringRules::default)
}

/// Configuration for batch portfolio scoring.
///
/// Defaults reproduce the fixed orchestration heuristics: bounded worker
/// pool at three quarters of the available cores, batch size 100 for small
/// portfolios and one tenth of the portfolio above 1000 records. The
/// overrides exist so tests can pin worker counts or force sequential
/// execution; the public entry point always uses the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Process batches on a worker pool (default: true)
    ///
    /// When disabled, batches are scored sequentially on the caller's
    /// thread. Useful for debugging and for equivalence tests.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Worker pool size override (default: 75% of available cores, min 1)
    #[serde(default)]
    pub workers: Option<usize>,

    /// Batch size override (default: the fixed sizing policy)
    #[serde(default)]
    pub batch_size: Option<usize>,
}

fn default_parallel() -> bool {
    true
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            workers: None,
            batch_size: None,
        }
    }
}

impl BatchConfig {
    /// Create a new batch config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Create a config with a pinned worker pool size.
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: Some(workers),
            ..Default::default()
        }
    }

    /// Get the effective worker pool size.
    ///
    /// Returns the configured override, or max(1, 75% of the available
    /// parallel execution units). Headroom is reserved so the host is not
    /// saturated while a portfolio is being scored.
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or_else(default_worker_count)
    }

    /// Get the effective batch size for a portfolio of `portfolio_len` records.
    ///
    /// The fixed policy bounds per-batch memory and worker turnaround:
    /// above 1000 records each batch holds a tenth of the portfolio
    /// (roughly ten batches regardless of size), otherwise 100 records.
    pub fn effective_batch_size(&self, portfolio_len: usize) -> usize {
        self.batch_size
            .unwrap_or_else(|| policy_batch_size(portfolio_len))
    }
}

/// Batch size under the fixed sizing policy.
fn policy_batch_size(portfolio_len: usize) -> usize {
    if portfolio_len > LARGE_PORTFOLIO_THRESHOLD {
        portfolio_len / LARGE_PORTFOLIO_BATCH_DIVISOR
    } else {
        SMALL_PORTFOLIO_BATCH_SIZE
    }
}

/// Default worker pool size: 75% of the available cores, at least one.
fn default_worker_count() -> usize {
    (num_cpus::get() * 3 / 4).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_rules_default_thresholds() {
        let rules = ScoringRules::default();
        assert_eq!(rules.ltv_high_pct, 90.0);
        assert_eq!(rules.ltv_elevated_pct, 80.0);
        assert_eq!(rules.dti_high_pct, 50.0);
        assert_eq!(rules.dti_elevated_pct, 40.0);
        assert_eq!(rules.aaa_ceiling, 2);
        assert_eq!(rules.bbb_ceiling, 5);
    }

    #[test]
    fn test_get_scoring_rules_is_stable() {
        assert_eq!(get_scoring_rules(), get_scoring_rules());
        assert_eq!(*get_scoring_rules(), ScoringRules::default());
    }

    #[test]
    fn test_batch_config_default() {
        let config = BatchConfig::default();
        assert!(config.parallel);
        assert!(config.workers.is_none());
        assert!(config.batch_size.is_none());
    }

    #[test]
    fn test_batch_config_sequential() {
        let config = BatchConfig::sequential();
        assert!(!config.parallel);
    }

    #[test]
    fn test_effective_workers() {
        // With explicit value
        let config = BatchConfig::with_workers(4);
        assert_eq!(config.effective_workers(), 4);

        // Without explicit value (CPU-count heuristic, always at least one)
        let config = BatchConfig::default();
        assert!(config.effective_workers() >= 1);
        assert!(config.effective_workers() <= num_cpus::get());
    }

    #[test]
    fn test_effective_batch_size_small_portfolio() {
        let config = BatchConfig::default();
        assert_eq!(config.effective_batch_size(1), 100);
        assert_eq!(config.effective_batch_size(250), 100);
        assert_eq!(config.effective_batch_size(1000), 100);
    }

    #[test]
    fn test_effective_batch_size_large_portfolio() {
        let config = BatchConfig::default();
        assert_eq!(config.effective_batch_size(1001), 100);
        assert_eq!(config.effective_batch_size(2500), 250);
        assert_eq!(config.effective_batch_size(100_000), 10_000);
    }

    #[test]
    fn test_effective_batch_size_override() {
        let config = BatchConfig {
            batch_size: Some(7),
            ..Default::default()
        };
        assert_eq!(config.effective_batch_size(5000), 7);
    }

    #[test]
    fn test_batch_config_serde() {
        let config = BatchConfig {
            parallel: true,
            workers: Some(8),
            batch_size: Some(200),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: BatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
