use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::provider::{ProviderFault, SentimentProvider};
use crate::{SentimentScore, Ticker};

/// Positive finance terms, matched on whole lowercase words.
const POSITIVE_TERMS: &[&str] = &[
    "growth",
    "record",
    "strong",
    "beat",
    "exceeded",
    "momentum",
    "profitable",
    "raised",
    "improved",
    "expansion",
    "confident",
    "outperformed",
];

/// Negative finance terms.
const NEGATIVE_TERMS: &[&str] = &[
    "decline",
    "miss",
    "missed",
    "weak",
    "loss",
    "headwinds",
    "impairment",
    "lowered",
    "restructuring",
    "slowdown",
    "uncertainty",
    "churn",
];

/// Supplies the raw earnings text the sentiment scorer classifies.
pub trait TranscriptSource: Send + Sync {
    /// Most recent earnings-call transcript, or `None` when unavailable.
    fn transcript(&self, ticker: &Ticker) -> Option<String>;
}

/// Canned transcript source for offline runs; every ticker gets the same
/// mildly positive prepared remarks.
#[derive(Debug, Default)]
pub struct CannedTranscripts;

impl TranscriptSource for CannedTranscripts {
    fn transcript(&self, ticker: &Ticker) -> Option<String> {
        Some(format!(
            "{} delivered record revenue this quarter with strong margin growth \
             and improved free cash flow, though management flagged some \
             uncertainty in the demand environment.",
            ticker
        ))
    }
}

/// Rule-based earnings sentiment scorer.
///
/// Scores the transcript as (positive hits - negative hits) over total
/// hits, which lands in [-1, 1] by construction; a transcript with no
/// lexicon hits scores 0. Stands in for a hosted classifier behind the
/// same contract.
pub struct LexiconSentiment {
    source: Arc<dyn TranscriptSource>,
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self {
            source: Arc::new(CannedTranscripts),
        }
    }
}

impl LexiconSentiment {
    pub fn with_source(source: Arc<dyn TranscriptSource>) -> Self {
        Self { source }
    }

    fn score_text(text: &str) -> f64 {
        let mut positive = 0_u32;
        let mut negative = 0_u32;

        for word in text
            .split(|ch: char| !ch.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
        {
            let word = word.to_ascii_lowercase();
            if POSITIVE_TERMS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_TERMS.contains(&word.as_str()) {
                negative += 1;
            }
        }

        let total = positive + negative;
        if total == 0 {
            return 0.0;
        }
        (positive as f64 - negative as f64) / total as f64
    }
}

impl SentimentProvider for LexiconSentiment {
    fn sentiment<'a>(
        &'a self,
        ticker: Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<SentimentScore, ProviderFault>> + Send + 'a>> {
        Box::pin(async move {
            let text = self.source.transcript(&ticker).ok_or_else(|| {
                ProviderFault::not_found(format!("no earnings transcript for '{ticker}'"))
            })?;

            SentimentScore::new(Self::score_text(&text))
                .map_err(|error| ProviderFault::internal(error.to_string()))
        })
    }
}
