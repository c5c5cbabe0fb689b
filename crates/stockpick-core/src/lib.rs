//! # Stockpick Core
//!
//! Deterministic stock evaluation engine: combines quantitative
//! fundamentals, a DCF intrinsic-value estimate, and an earnings
//! sentiment signal into a single weighted recommendation.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Bundled provider adapters (Yahoo fundamentals, lexicon sentiment, linear quant) |
//! | [`blend`] | Weighted score blending and verdict thresholds |
//! | [`domain`] | Domain model (snapshot, scores, weights, result) |
//! | [`error`] | Validation and evaluation error types |
//! | [`http_client`] | HTTP transport abstraction (reqwest/noop) |
//! | [`orchestrator`] | Evaluation pipeline over injected providers |
//! | [`provider`] | Provider capability traits and structured faults |
//! | [`valuation`] | DCF intrinsic value estimate |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockpick_core::adapters::{LexiconSentiment, LinearQuantScorer, YahooFundamentals};
//! use stockpick_core::{Evaluator, Ticker, WeightSplit};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let evaluator = Evaluator::new(
//!         Arc::new(YahooFundamentals::default()),
//!         Arc::new(LexiconSentiment::default()),
//!         Arc::new(LinearQuantScorer::default()),
//!     );
//!
//!     let result = evaluator
//!         .evaluate(Ticker::parse("aapl")?, WeightSplit::default())
//!         .await?;
//!     println!("{}: {} ({:.2})", result.ticker, result.verdict, result.final_score);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Malformed caller input surfaces as [`ValidationError`]; collaborator
//! failures surface as [`ProviderError`] annotated with the failing
//! [`Stage`] so callers can retry just that stage. Either kind aborts
//! the evaluation; no partial result is ever returned.

pub mod adapters;
pub mod blend;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod orchestrator;
pub mod provider;
pub mod valuation;

pub use blend::{blend, BlendOutcome};
pub use domain::{
    EvaluationResult, FeatureVector, FundamentalsSnapshot, QuantScore, SentimentScore, Ticker,
    UtcDateTime, Verdict, WeightSplit, FEATURE_SCHEMA_VERSION,
};
pub use error::{EvalError, ValidationError};
pub use orchestrator::Evaluator;
pub use provider::{
    FaultKind, FundamentalsProvider, ProviderError, ProviderFault, QuantScorer, SentimentProvider,
    Stage,
};
pub use valuation::{estimate_intrinsic_value, DcfParams};
