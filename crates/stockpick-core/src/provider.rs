//! Provider traits and the structured errors they surface.
//!
//! The evaluation core never talks to the outside world directly; it
//! consumes three narrow capability contracts, each implemented by an
//! adapter:
//!
//! | Trait | Supplies |
//! |-------|----------|
//! | [`FundamentalsProvider`] | Raw financial line items for a ticker |
//! | [`SentimentProvider`] | Earnings sentiment score in [-1, 1] |
//! | [`QuantScorer`] | Fundamental quality score in [0, 100] |
//!
//! All traits use boxed futures so adapters can be held as trait objects
//! and shared across tasks.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FeatureVector, FundamentalsSnapshot, QuantScore, SentimentScore, Ticker};

/// Pipeline stage that a provider failure is attributed to.
///
/// Lets the caller retry just the failed stage if it wants to; the
/// orchestrator itself never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fundamentals,
    Sentiment,
    Quant,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fundamentals => "fundamentals",
            Self::Sentiment => "sentiment",
            Self::Quant => "quant",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adapter-level failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Unavailable,
    NotFound,
    RateLimited,
    InvalidRequest,
    Timeout,
    Internal,
}

/// Structured error returned by provider adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFault {
    kind: FaultKind,
    message: String,
    retryable: bool,
}

impl ProviderFault {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::NotFound,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Timeout,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FaultKind::Unavailable => "provider.unavailable",
            FaultKind::NotFound => "provider.not_found",
            FaultKind::RateLimited => "provider.rate_limited",
            FaultKind::InvalidRequest => "provider.invalid_request",
            FaultKind::Timeout => "provider.timeout",
            FaultKind::Internal => "provider.internal",
        }
    }
}

impl Display for ProviderFault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ProviderFault {}

/// Provider failure annotated with the stage it occurred in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provider stage '{stage}' failed: {cause}")]
pub struct ProviderError {
    pub stage: Stage,
    pub cause: ProviderFault,
}

impl ProviderError {
    pub fn new(stage: Stage, cause: ProviderFault) -> Self {
        Self { stage, cause }
    }
}

/// Supplies raw financial line items for a ticker.
pub trait FundamentalsProvider: Send + Sync {
    /// Fetches the most recent fundamentals snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderFault`] on lookup/network failure or when
    /// required line items are missing.
    fn fundamentals<'a>(
        &'a self,
        ticker: Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<FundamentalsSnapshot, ProviderFault>> + Send + 'a>>;
}

/// Scores the tone of a ticker's most recent earnings communication.
pub trait SentimentProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ProviderFault`] when no earnings text is available or
    /// classification fails.
    fn sentiment<'a>(
        &'a self,
        ticker: Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<SentimentScore, ProviderFault>> + Send + 'a>>;
}

/// Produces a 0-100 fundamental quality score from a feature vector.
pub trait QuantScorer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ProviderFault`] on a malformed or unsupported feature
    /// vector (for example, an unknown schema version).
    fn score<'a>(
        &'a self,
        features: FeatureVector,
    ) -> Pin<Box<dyn Future<Output = Result<QuantScore, ProviderFault>> + Send + 'a>>;
}
