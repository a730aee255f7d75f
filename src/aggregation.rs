//! Portfolio-level aggregation and rating assignment.
//!
//! Sums the per-record risk deltas, nudges the total by the portfolio's
//! average credit score, and maps the adjusted total onto the three rating
//! bands. The bands are contiguous over the integers, so every total lands
//! in exactly one of them and there is no fallback arm to reach.

use crate::config::{get_scoring_rules, ScoringRules};
use crate::core::{AggregateResult, Rating, RatingError, Result};
use log::debug;

/// Combine per-record scores into the final portfolio rating.
///
/// Both slices are index-aligned outputs of the batch orchestrator. Fails
/// with an empty-sequence error if `credit_scores` is empty. The
/// orchestrator's non-empty precondition should make that unreachable, but
/// the average would otherwise divide by zero, so it is checked here too.
pub fn aggregate(credit_scores: &[i64], risk_scores: &[i32]) -> Result<AggregateResult> {
    if credit_scores.is_empty() {
        return Err(RatingError::EmptyCreditScores);
    }
    let rules = get_scoring_rules();

    let total: i64 = risk_scores.iter().map(|&risk| i64::from(risk)).sum();
    let average_credit =
        credit_scores.iter().sum::<i64>() as f64 / credit_scores.len() as f64;

    let total_risk = apply_average_credit_adjustment(total, average_credit, rules);
    let rating = rating_for_total(total_risk);
    debug!(
        "portfolio total risk {total_risk} (average credit {average_credit:.1}) rated {rating}"
    );

    Ok(AggregateResult { total_risk, rating })
}

/// Nudge the total by the portfolio-wide average credit score.
///
/// Mirrors the per-record credit rule: a strong average reduces the total
/// by one, a weak average raises it by one, 650–699 leaves it unchanged.
fn apply_average_credit_adjustment(total: i64, average_credit: f64, rules: &ScoringRules) -> i64 {
    if average_credit >= rules.strong_credit_cutoff as f64 {
        total + i64::from(rules.strong_credit_delta)
    } else if average_credit < rules.weak_credit_cutoff as f64 {
        total + i64::from(rules.weak_credit_delta)
    } else {
        total
    }
}

/// Map an adjusted total onto its rating band.
///
/// The bands partition the integers: at or below the AAA ceiling, between
/// the ceilings, above the BBB ceiling.
pub fn rating_for_total(total_risk: i64) -> Rating {
    let rules = get_scoring_rules();
    if total_risk <= rules.aaa_ceiling {
        Rating::Aaa
    } else if total_risk <= rules.bbb_ceiling {
        Rating::Bbb
    } else {
        Rating::C
    }
}
