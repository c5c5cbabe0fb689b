use thiserror::Error;

use crate::provider::ProviderError;

/// Validation and contract errors exposed by `stockpick-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("shareholder equity is zero; derived ratios are undefined")]
    ZeroEquity,

    #[error("sentiment score {value} is outside [-1, 1]")]
    SentimentOutOfRange { value: f64 },
    #[error("quant score {value} is outside [0, 100]")]
    QuantScoreOutOfRange { value: f64 },

    #[error("weight '{field}' {value} is outside [0, 1]")]
    WeightOutOfRange { field: &'static str, value: f64 },
    #[error("weights are degenerate: both components are zero")]
    DegenerateWeights,

    #[error("discount rate {value} must be greater than -1")]
    DiscountRateTooLow { value: f64 },
    #[error("projection horizon must be at least 1 year")]
    ZeroHorizon,

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
}

/// Top-level error type for a single evaluation run.
///
/// Both kinds abort the evaluation immediately; no partial
/// [`EvaluationResult`](crate::EvaluationResult) is ever produced.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
