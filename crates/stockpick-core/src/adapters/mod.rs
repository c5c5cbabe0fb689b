//! Bundled provider adapters.
//!
//! | Adapter | Implements | Backing |
//! |---------|------------|---------|
//! | [`YahooFundamentals`] | `FundamentalsProvider` | Yahoo quoteSummary API or deterministic fake |
//! | [`LexiconSentiment`] | `SentimentProvider` | Rule-based term lexicon over earnings text |
//! | [`LinearQuantScorer`] | `QuantScorer` | Fixed linear model, logistic-squashed |

mod lexicon;
mod linear;
mod yahoo;

pub use lexicon::{CannedTranscripts, LexiconSentiment, TranscriptSource};
pub use linear::LinearQuantScorer;
pub use yahoo::YahooFundamentals;
