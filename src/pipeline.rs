//! Top-level credit rating pipeline.
//!
//! The single entry point for callers: a JSON payload carrying a
//! `mortgages` array goes in, a rating label (or one structured failure)
//! comes out. Downstream errors propagate unmodified except for a single
//! contextual wrap added here; the underlying variant stays reachable via
//! [`RatingError::root_cause`](crate::core::RatingError::root_cause).

use crate::aggregation::aggregate;
use crate::batch::score_portfolio;
use crate::core::{AggregateResult, Rating, RatingError, Result, ResultExt};
use crate::validation::json_type_name;
use serde_json::Value;

/// Compute the credit rating for a mortgage portfolio payload.
///
/// The payload must be an object with a `mortgages` key bound to a
/// non-empty array of raw mortgage mappings. Any failure means no rating
/// was computed; callers treat it as a hard rejection, never a partial
/// result.
pub fn calculate_credit_rating(payload: &Value) -> Result<Rating> {
    calculate_credit_rating_detailed(payload).map(|result| result.rating)
}

/// Like [`calculate_credit_rating`], returning the adjusted total risk
/// alongside the rating label.
pub fn calculate_credit_rating_detailed(payload: &Value) -> Result<AggregateResult> {
    let mortgages = extract_mortgages(payload)?;
    let scores =
        score_portfolio(mortgages).context("credit rating computation failed")?;
    aggregate(&scores.credit_scores, &scores.risk_scores)
        .context("credit rating computation failed")
}

/// Pull the `mortgages` array out of the payload, rejecting shape problems.
fn extract_mortgages(payload: &Value) -> Result<&[Value]> {
    let object = payload.as_object().ok_or_else(|| {
        RatingError::invalid_payload(format!(
            "payload must be an object, got {}",
            json_type_name(payload)
        ))
    })?;

    match object.get("mortgages") {
        Some(Value::Array(mortgages)) => Ok(mortgages),
        Some(other) => Err(RatingError::invalid_payload(format!(
            "`mortgages` must be an array, got {}",
            json_type_name(other)
        ))),
        None => Err(RatingError::invalid_payload(
            "payload is missing the `mortgages` key",
        )),
    }
}
