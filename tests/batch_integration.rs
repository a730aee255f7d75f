//! Integration tests for parallel batch portfolio scoring.
//!
//! These verify the orchestration invariants across worker counts and
//! portfolio sizes: outputs stay index-aligned with the input, parallel and
//! sequential runs agree, the batch sizing policy switches at the large
//! portfolio threshold, and failures surface deterministically.

use mortgage_rating::{
    score_portfolio_with_config, score_record, validate_record, BatchConfig, RatingError,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Helper to build a portfolio whose records vary across every scoring rule.
fn varied_portfolio(len: usize) -> Vec<Value> {
    (0..len)
        .map(|i| {
            let credit_score = 300 + (i as i64 * 37) % 551;
            let loan_fraction = (i % 10) as f64 / 10.0;
            let debt_fraction = (i % 7) as f64 / 10.0;
            json!({
                "credit_score": credit_score,
                "loan_amount": 400_000.0 * loan_fraction,
                "property_value": 400_000,
                "annual_income": 90_000,
                "debt_amount": 90_000.0 * debt_fraction,
                "loan_type": if i % 2 == 0 { "fixed" } else { "adjustable" },
                "property_type": if i % 3 == 0 { "condo" } else { "single_family" },
            })
        })
        .collect()
}

/// Expected per-record outputs computed one record at a time, in order.
fn expected_scores(portfolio: &[Value]) -> (Vec<i32>, Vec<i64>) {
    portfolio
        .iter()
        .map(|raw| {
            let record = validate_record(raw.as_object().unwrap()).unwrap();
            (score_record(&record).unwrap(), record.credit_score)
        })
        .unzip()
}

// ============================================================================
// Order Preservation
// ============================================================================

#[test]
fn test_output_count_and_order_match_input() {
    let _ = env_logger::builder().is_test(true).try_init();
    let portfolio = varied_portfolio(730);
    let (expected_risks, expected_credits) = expected_scores(&portfolio);

    for workers in [1, 2, 5, 16] {
        let scores =
            score_portfolio_with_config(&portfolio, &BatchConfig::with_workers(workers)).unwrap();
        assert_eq!(scores.len(), portfolio.len());
        assert_eq!(scores.risk_scores, expected_risks);
        assert_eq!(scores.credit_scores, expected_credits);
    }
}

#[test]
fn test_order_preserved_across_large_portfolio_policy() {
    // 2400 records: the sizing policy switches to len/10, so ten 240-record
    // batches cover the portfolio. Alignment must survive the switch.
    let portfolio = varied_portfolio(2400);
    let (expected_risks, expected_credits) = expected_scores(&portfolio);

    let scores = score_portfolio_with_config(&portfolio, &BatchConfig::default()).unwrap();
    assert_eq!(scores.risk_scores, expected_risks);
    assert_eq!(scores.credit_scores, expected_credits);
}

#[test]
fn test_ragged_final_batch_preserved() {
    // 1005 records switch to len/10 sizing: ten 100-record batches plus a
    // 5-record tail batch. The tail must not be dropped or reordered.
    let portfolio = varied_portfolio(1005);
    let (_, expected_credits) = expected_scores(&portfolio);

    let scores = score_portfolio_with_config(&portfolio, &BatchConfig::default()).unwrap();
    assert_eq!(scores.len(), 1005);
    assert_eq!(scores.credit_scores, expected_credits);
}

// ============================================================================
// Parallel / Sequential Equivalence
// ============================================================================

#[test]
fn test_parallel_and_sequential_agree() {
    let portfolio = varied_portfolio(600);

    let parallel = score_portfolio_with_config(&portfolio, &BatchConfig::default()).unwrap();
    let sequential = score_portfolio_with_config(&portfolio, &BatchConfig::sequential()).unwrap();

    assert_eq!(parallel, sequential);
}

// ============================================================================
// Failure Propagation
// ============================================================================

#[test]
fn test_empty_portfolio_fails_before_partitioning() {
    let err = score_portfolio_with_config(&[], &BatchConfig::default()).unwrap_err();
    assert!(matches!(err, RatingError::EmptyPortfolio));
}

#[test]
fn test_error_in_late_batch_discards_results() {
    let mut portfolio = varied_portfolio(500);
    portfolio[430]["loan_type"] = json!("interest_only");

    let err = score_portfolio_with_config(&portfolio, &BatchConfig::default()).unwrap_err();
    match err {
        RatingError::InvalidEnum { field, value, .. } => {
            assert_eq!(field, "loan_type");
            assert_eq!(value, "interest_only");
        }
        other => panic!("expected InvalidEnum, got {other:?}"),
    }
}

#[test]
fn test_earliest_failing_batch_wins() {
    // Invalid records land in batches 0 and 4; the batch-order fold must
    // report the first one regardless of which worker finishes first.
    let mut portfolio = varied_portfolio(500);
    portfolio[3]["credit_score"] = json!(299);
    portfolio[444]["property_type"] = json!("yurt");

    for _ in 0..10 {
        let err = score_portfolio_with_config(&portfolio, &BatchConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RatingError::CreditScoreOutOfRange { value: 299 }
        ));
    }
}
