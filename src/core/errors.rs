//! Shared error types for portfolio rating operations

use crate::core::types::RatioKind;
use thiserror::Error;

/// Main error type for rating operations.
///
/// Every failure in the pipeline is one of these variants. Validation and
/// scoring errors abort the whole portfolio computation; there is no partial
/// result. The entry point wraps the underlying error once with context via
/// [`ResultExt::context`], keeping the original variant reachable through
/// [`RatingError::root_cause`].
#[derive(Debug, Error)]
pub enum RatingError {
    /// No mortgage records were supplied
    #[error("no mortgages were provided for computation")]
    EmptyPortfolio,

    /// Payload shape errors (missing `mortgages` key, wrong container types)
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },

    /// One or more required record fields are absent; lists every missing key
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A field is present but has the wrong type
    #[error("invalid type for {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// Credit score outside the valid schema bounds
    #[error("credit score must be between 300 and 850, got {value}")]
    CreditScoreOutOfRange { value: i64 },

    /// loan_type / property_type outside its fixed enumeration
    #[error("invalid {field} {value:?}: must be one of {}", allowed.join(", "))]
    InvalidEnum {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A financial ratio would exceed 100%
    #[error("{kind} ratio cannot exceed 100% ({numerator} > {denominator})")]
    RatioOverflow {
        kind: RatioKind,
        numerator: f64,
        denominator: f64,
    },

    /// Aggregation attempted over an empty credit score sequence
    #[error("cannot average an empty credit score sequence")]
    EmptyCreditScores,

    /// An error wrapped with contextual information at a pipeline seam
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<RatingError>,
    },

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl RatingError {
    /// Create a payload shape error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    /// Create a missing-fields error listing every absent key
    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::MissingFields { fields }
    }

    /// Create a type mismatch error for a named field
    pub fn type_mismatch(
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            actual,
        }
    }

    /// Create a ratio overflow error naming the offending ratio
    pub fn ratio_overflow(kind: RatioKind, numerator: f64, denominator: f64) -> Self {
        Self::RatioOverflow {
            kind,
            numerator,
            denominator,
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Walk through context wrappers to the underlying error variant.
    ///
    /// Callers match on the result to interpret a failure (e.g. distinguish
    /// an empty portfolio from a malformed record) without caring how many
    /// context layers the pipeline added.
    pub fn root_cause(&self) -> &RatingError {
        match self {
            Self::WithContext { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, RatingError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
