//! Parallel batch orchestration over a mortgage portfolio.
//!
//! The portfolio is split into contiguous batches, each batch is scored as
//! one independent unit of work on a bounded rayon pool, and the partial
//! results are joined in submission order. Errors cross the worker boundary
//! as `Result` values, never as panics, and the first failure in submission
//! order aborts the whole call. A rating computed over a subset would
//! misrepresent the portfolio, so there is no partial-success contract.

use crate::config::BatchConfig;
use crate::core::{RatingError, Result};
use crate::scoring::score_record;
use crate::validation::{json_type_name, validate_record};
use log::{debug, trace};
use rayon::prelude::*;
use serde_json::Value;

/// Index-aligned per-record outputs of one portfolio scoring pass.
///
/// `risk_scores[i]` and `credit_scores[i]` both describe the record at
/// position `i` of the input portfolio.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioScores {
    /// Risk delta per record, in portfolio order
    pub risk_scores: Vec<i32>,
    /// Credit score per record, in portfolio order
    pub credit_scores: Vec<i64>,
}

impl PortfolioScores {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            risk_scores: Vec::with_capacity(capacity),
            credit_scores: Vec::with_capacity(capacity),
        }
    }

    fn extend(&mut self, other: PortfolioScores) {
        self.risk_scores.extend(other.risk_scores);
        self.credit_scores.extend(other.credit_scores);
    }

    /// Number of records scored
    pub fn len(&self) -> usize {
        self.risk_scores.len()
    }

    /// True when no records were scored
    pub fn is_empty(&self) -> bool {
        self.risk_scores.is_empty()
    }
}

/// Score a whole portfolio with the default orchestration heuristics.
pub fn score_portfolio(portfolio: &[Value]) -> Result<PortfolioScores> {
    score_portfolio_with_config(portfolio, &BatchConfig::default())
}

/// Score a whole portfolio under an explicit [`BatchConfig`].
///
/// Batches are contiguous, non-overlapping and cover the portfolio in its
/// original order; the last batch may be short. Results are concatenated in
/// batch submission order, so the output sequences are index-aligned with
/// the input regardless of worker count. The worker pool is scoped to this
/// call and torn down before it returns, on both success and failure paths.
pub fn score_portfolio_with_config(
    portfolio: &[Value],
    config: &BatchConfig,
) -> Result<PortfolioScores> {
    if portfolio.is_empty() {
        return Err(RatingError::EmptyPortfolio);
    }

    let batch_size = config.effective_batch_size(portfolio.len());
    let batches: Vec<&[Value]> = portfolio.chunks(batch_size).collect();
    debug!(
        "scoring {} records in {} batches of up to {}",
        portfolio.len(),
        batches.len(),
        batch_size
    );

    let outcomes: Vec<Result<PortfolioScores>> = if config.parallel && batches.len() > 1 {
        let workers = config.effective_workers();
        debug!("building scoped scoring pool with {workers} workers");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("rating-worker-{index}"))
            .build()
            .map_err(|e| RatingError::External(anyhow::Error::new(e)))?;
        pool.install(|| batches.par_iter().map(|batch| score_batch(batch)).collect())
    } else {
        batches.iter().map(|batch| score_batch(batch)).collect()
    };

    // Fold in submission order: preserves portfolio order in the output and
    // surfaces the first error by batch order, discarding later partials.
    let mut scores = PortfolioScores::with_capacity(portfolio.len());
    for outcome in outcomes {
        scores.extend(outcome?);
    }
    Ok(scores)
}

/// Score one batch: validate and score each record sequentially in order.
///
/// A unit of work for the pool: owns its slice, touches no shared state,
/// and returns a fresh partial result or the first record failure.
fn score_batch(batch: &[Value]) -> Result<PortfolioScores> {
    let mut scores = PortfolioScores::with_capacity(batch.len());
    for raw in batch {
        let mapping = raw.as_object().ok_or_else(|| {
            RatingError::invalid_payload(format!(
                "mortgage record must be an object, got {}",
                json_type_name(raw)
            ))
        })?;
        let record = validate_record(mapping)?;
        scores.risk_scores.push(score_record(&record)?);
        scores.credit_scores.push(record.credit_score);
    }
    trace!("scored batch of {} records", batch.len());
    Ok(scores)
}
