//! Weighted blending of quant and sentiment signals into a verdict.

use serde::{Deserialize, Serialize};

use crate::{QuantScore, SentimentScore, ValidationError, Verdict, WeightSplit};

/// Result of blending the two signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendOutcome {
    pub final_score: f64,
    pub verdict: Verdict,
}

/// Blend a quant score and a sentiment score under the given weights.
///
/// Sentiment is rescaled from [-1, 1] to a [-100, 100] contribution so it
/// weighs on the same scale as the quant score. The weight pair is
/// normalized first; a degenerate (0, 0) pair is rejected.
///
/// Verdict boundaries are asymmetric on purpose: a final score of exactly
/// 75 is Hold, exactly 50 is Avoid.
pub fn blend(
    quant: QuantScore,
    sentiment: SentimentScore,
    weights: WeightSplit,
) -> Result<BlendOutcome, ValidationError> {
    let weights = weights.normalized()?;
    let final_score =
        weights.fundamentals * quant.value() + weights.sentiment * (sentiment.value() * 100.0);

    let verdict = if final_score > 75.0 {
        Verdict::StrongBuy
    } else if final_score > 50.0 {
        Verdict::Hold
    } else {
        Verdict::Avoid
    };

    Ok(BlendOutcome {
        final_score,
        verdict,
    })
}
