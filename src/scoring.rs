//! Per-record risk scoring from financial ratios and categorical rules.
//!
//! [`score_record`] is a pure function of one validated record and the
//! fixed rule table: identical input always yields an identical delta, no
//! shared or mutable state is touched. That purity is what lets the batch
//! orchestrator distribute records across workers freely.

use crate::config::{get_scoring_rules, ScoringRules};
use crate::core::{LoanType, MortgageRecord, PropertyType, RatingError, RatioKind, Result};

/// Compute the integer risk delta for one validated record.
///
/// The delta is the sum of the ratio band rules (loan-to-value and
/// debt-to-income), the credit-score band and the categorical loan and
/// property adjustments, and may be negative for low-risk records.
/// Fails with a ratio overflow error when either ratio would exceed 100%.
pub fn score_record(record: &MortgageRecord) -> Result<i32> {
    let rules = get_scoring_rules();
    let mut risk = 0i32;

    let ltv = ratio_pct(
        record.loan_amount,
        record.property_value,
        RatioKind::LoanToValue,
    )?;
    risk += ratio_delta(ltv, rules.ltv_high_pct, rules.ltv_elevated_pct, rules);

    let dti = ratio_pct(
        record.debt_amount,
        record.annual_income,
        RatioKind::DebtToIncome,
    )?;
    risk += ratio_delta(dti, rules.dti_high_pct, rules.dti_elevated_pct, rules);

    risk += credit_score_delta(record.credit_score, rules);
    risk += loan_type_delta(record.loan_type, rules);
    risk += property_type_delta(record.property_type, rules);

    Ok(risk)
}

/// Ratio as a percentage, failing when it would exceed 100%.
///
/// Shared by the loan-to-value and debt-to-income rules; `kind` names the
/// ratio in the overflow error.
fn ratio_pct(numerator: f64, denominator: f64, kind: RatioKind) -> Result<f64> {
    if numerator > denominator {
        return Err(RatingError::ratio_overflow(kind, numerator, denominator));
    }
    Ok(numerator / denominator * 100.0)
}

/// Delta for a ratio band: high cutoff, elevated cutoff, else nothing
fn ratio_delta(pct: f64, high_cutoff: f64, elevated_cutoff: f64, rules: &ScoringRules) -> i32 {
    if pct > high_cutoff {
        rules.high_ratio_delta
    } else if pct > elevated_cutoff {
        rules.elevated_ratio_delta
    } else {
        0
    }
}

/// Delta for the credit-score band; 650–699 is neutral
fn credit_score_delta(credit_score: i64, rules: &ScoringRules) -> i32 {
    if credit_score >= rules.strong_credit_cutoff {
        rules.strong_credit_delta
    } else if credit_score < rules.weak_credit_cutoff {
        rules.weak_credit_delta
    } else {
        0
    }
}

/// Delta for the loan-type rule
fn loan_type_delta(loan_type: LoanType, rules: &ScoringRules) -> i32 {
    match loan_type {
        LoanType::Fixed => rules.fixed_loan_delta,
        LoanType::Adjustable => rules.adjustable_loan_delta,
    }
}

/// Delta for the property-type rule
fn property_type_delta(property_type: PropertyType, rules: &ScoringRules) -> i32 {
    match property_type {
        PropertyType::SingleFamily => 0,
        PropertyType::Condo => rules.condo_delta,
    }
}
