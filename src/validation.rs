//! Structural validation of raw mortgage mappings.
//!
//! Turns one raw JSON mapping into a typed [`MortgageRecord`], failing on
//! missing fields (all of them reported at once), wrong types, an
//! out-of-range credit score, or an enumeration value outside its allowed
//! set. Ratio constraints are not checked here: structural validity is
//! independent of derived-ratio validity, which the scorer enforces.

use crate::config::{CREDIT_SCORE_MAX, CREDIT_SCORE_MIN};
use crate::core::{LoanType, MortgageRecord, PropertyType, RatingError, Result};
use serde_json::{Map, Value};

/// The seven fields every mortgage record must carry
const REQUIRED_FIELDS: [&str; 7] = [
    "credit_score",
    "loan_amount",
    "property_value",
    "annual_income",
    "debt_amount",
    "loan_type",
    "property_type",
];

/// Validate one raw mapping into an immutable [`MortgageRecord`].
///
/// Checks run in schema order: presence of every required field first
/// (reporting the full missing set), then per-field type checks, the
/// credit-score range, and enumeration membership.
pub fn validate_record(raw: &Map<String, Value>) -> Result<MortgageRecord> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !raw.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(RatingError::missing_fields(missing));
    }

    let credit_score = require_integer(raw, "credit_score")?;
    if !(CREDIT_SCORE_MIN..=CREDIT_SCORE_MAX).contains(&credit_score) {
        return Err(RatingError::CreditScoreOutOfRange {
            value: credit_score,
        });
    }

    let loan_amount = require_number(raw, "loan_amount")?;
    let property_value = require_number(raw, "property_value")?;
    let annual_income = require_number(raw, "annual_income")?;
    let debt_amount = require_number(raw, "debt_amount")?;

    let loan_type = require_enum(raw, "loan_type", LoanType::ALLOWED, LoanType::from_wire)?;
    let property_type = require_enum(
        raw,
        "property_type",
        PropertyType::ALLOWED,
        PropertyType::from_wire,
    )?;

    Ok(MortgageRecord {
        credit_score,
        loan_amount,
        property_value,
        annual_income,
        debt_amount,
        loan_type,
        property_type,
    })
}

/// JSON type name for error messages, distinguishing integer from float
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require an integer-typed field; floats are rejected
fn require_integer(raw: &Map<String, Value>, field: &'static str) -> Result<i64> {
    let value = &raw[field];
    value
        .as_i64()
        .ok_or_else(|| RatingError::type_mismatch(field, "integer", json_type_name(value)))
}

/// Require a numeric field; integer and float representations both pass
fn require_number(raw: &Map<String, Value>, field: &'static str) -> Result<f64> {
    let value = &raw[field];
    value
        .as_f64()
        .ok_or_else(|| RatingError::type_mismatch(field, "integer or float", json_type_name(value)))
}

/// Require a string field whose value parses into the fixed enumeration
fn require_enum<T>(
    raw: &Map<String, Value>,
    field: &'static str,
    allowed: &'static [&'static str],
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    let value = &raw[field];
    let text = value
        .as_str()
        .ok_or_else(|| RatingError::type_mismatch(field, "string", json_type_name(value)))?;
    parse(text).ok_or_else(|| RatingError::InvalidEnum {
        field,
        value: text.to_string(),
        allowed,
    })
}
