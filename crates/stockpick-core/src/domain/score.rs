use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Ticker, UtcDateTime, ValidationError};

/// Earnings-communication sentiment in the closed interval [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentScore(f64);

impl SentimentScore {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
            return Err(ValidationError::SentimentOutOfRange { value });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Fundamental quality score in the closed interval [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantScore(f64);

impl QuantScore {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::QuantScoreOutOfRange { value });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Caller-supplied weighting between fundamentals and sentiment.
///
/// A pair that does not sum to 1 is rescaled proportionally by
/// [`normalized`](Self::normalized); a pair of zeros is a configuration
/// error, never a silent divide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSplit {
    pub fundamentals: f64,
    pub sentiment: f64,
}

impl WeightSplit {
    pub fn new(fundamentals: f64, sentiment: f64) -> Result<Self, ValidationError> {
        validate_weight("fundamentals", fundamentals)?;
        validate_weight("sentiment", sentiment)?;
        Ok(Self {
            fundamentals,
            sentiment,
        })
    }

    /// Rescale both components proportionally so they sum to 1.
    pub fn normalized(self) -> Result<Self, ValidationError> {
        let total = self.fundamentals + self.sentiment;
        if total == 0.0 {
            return Err(ValidationError::DegenerateWeights);
        }
        Ok(Self {
            fundamentals: self.fundamentals / total,
            sentiment: self.sentiment / total,
        })
    }
}

impl Default for WeightSplit {
    /// 70% fundamentals, 30% sentiment.
    fn default() -> Self {
        Self {
            fundamentals: 0.7,
            sentiment: 0.3,
        }
    }
}

fn validate_weight(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::WeightOutOfRange { field, value });
    }
    Ok(())
}

/// Final recommendation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    StrongBuy,
    Hold,
    Avoid,
}

impl Verdict {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::Hold => "Hold",
            Self::Avoid => "Avoid",
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output record of one evaluation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub ticker: Ticker,
    pub as_of: UtcDateTime,
    pub quant_score: QuantScore,
    pub sentiment_score: SentimentScore,
    pub weights: WeightSplit,
    pub final_score: f64,
    pub verdict: Verdict,
    pub intrinsic_value: f64,
}
