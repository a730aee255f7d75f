//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Loan type enumeration for all supported loan structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    Fixed,
    Adjustable,
}

impl LoanType {
    /// Wire-format names accepted for this enumeration
    pub const ALLOWED: &'static [&'static str] = &["fixed", "adjustable"];

    /// Parse the wire-format name, `None` if outside the allowed set
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "fixed" => Some(LoanType::Fixed),
            "adjustable" => Some(LoanType::Adjustable),
            _ => None,
        }
    }

    /// Get the wire-format name for this loan type
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Fixed => "fixed",
            LoanType::Adjustable => "adjustable",
        }
    }
}

/// Property type enumeration for all supported property classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Condo,
}

impl PropertyType {
    /// Wire-format names accepted for this enumeration
    pub const ALLOWED: &'static [&'static str] = &["single_family", "condo"];

    /// Parse the wire-format name, `None` if outside the allowed set
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "single_family" => Some(PropertyType::SingleFamily),
            "condo" => Some(PropertyType::Condo),
            _ => None,
        }
    }

    /// Get the wire-format name for this property type
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "single_family",
            PropertyType::Condo => "condo",
        }
    }
}

/// A structurally validated mortgage record.
///
/// Constructed only by the validator; immutable afterwards. Type and range
/// checks have already passed, so scoring can consume the fields directly.
/// Ratio constraints (loan-to-value, debt-to-income) are checked at scoring
/// time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageRecord {
    pub credit_score: i64,
    pub loan_amount: f64,
    pub property_value: f64,
    pub annual_income: f64,
    pub debt_amount: f64,
    pub loan_type: LoanType,
    pub property_type: PropertyType,
}

/// Which financial ratio a scoring step was computing.
///
/// Carried by ratio overflow errors so the message names the offending
/// ratio rather than a bare "ratio exceeded" string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioKind {
    LoanToValue,
    DebtToIncome,
}

impl RatioKind {
    /// Get the display name for this ratio
    pub fn label(&self) -> &'static str {
        match self {
            RatioKind::LoanToValue => "loan-to-value",
            RatioKind::DebtToIncome => "debt-to-income",
        }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discrete credit rating for a whole portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// High rating, lowest risk
    #[serde(rename = "AAA")]
    Aaa,
    /// Medium rating
    #[serde(rename = "BBB")]
    Bbb,
    /// Low rating, highest risk
    #[serde(rename = "C")]
    C,
}

impl Rating {
    /// Get the rating label for display
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Aaa => "AAA",
            Rating::Bbb => "BBB",
            Rating::C => "C",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final outcome of one portfolio rating computation.
///
/// Computed once per orchestration call; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Total risk score after the average-credit-score adjustment
    pub total_risk: i64,
    /// Rating label assigned to the adjusted total
    pub rating: Rating,
}
