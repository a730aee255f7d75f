// Export modules for library usage
pub mod aggregation;
pub mod batch;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod scoring;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    AggregateResult, LoanType, MortgageRecord, PropertyType, Rating, RatingError, RatioKind,
    Result, ResultExt,
};

pub use crate::aggregation::{aggregate, rating_for_total};
pub use crate::batch::{score_portfolio, score_portfolio_with_config, PortfolioScores};
pub use crate::config::{get_scoring_rules, BatchConfig, ScoringRules};
pub use crate::pipeline::{calculate_credit_rating, calculate_credit_rating_detailed};
pub use crate::scoring::score_record;
pub use crate::validation::validate_record;
