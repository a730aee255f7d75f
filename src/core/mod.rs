pub mod errors;
pub mod types;

pub use errors::{RatingError, Result, ResultExt};
pub use types::{AggregateResult, LoanType, MortgageRecord, PropertyType, Rating, RatioKind};
