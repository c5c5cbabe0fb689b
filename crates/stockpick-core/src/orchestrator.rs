//! Evaluation orchestrator: sequences providers and assembles the result.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::blend::blend;
use crate::provider::{
    FundamentalsProvider, ProviderError, ProviderFault, QuantScorer, SentimentProvider, Stage,
};
use crate::valuation::{estimate_intrinsic_value, DcfParams};
use crate::{EvalError, EvaluationResult, FeatureVector, Ticker, WeightSplit};

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_millis(3_000);

/// Stateless evaluation pipeline over injected providers.
///
/// Each [`evaluate`](Self::evaluate) call is independent; the evaluator
/// holds no mutable state, so concurrent evaluations for different
/// tickers need no coordination. Every provider call is bounded by
/// `call_timeout`; a timeout surfaces as a [`ProviderError`] whose cause
/// has [`FaultKind::Timeout`](crate::FaultKind::Timeout). Any single
/// provider failure aborts the whole evaluation; retries are the
/// caller's concern.
pub struct Evaluator {
    fundamentals: Arc<dyn FundamentalsProvider>,
    sentiment: Arc<dyn SentimentProvider>,
    quant: Arc<dyn QuantScorer>,
    dcf_params: DcfParams,
    call_timeout: Duration,
}

impl Evaluator {
    pub fn new(
        fundamentals: Arc<dyn FundamentalsProvider>,
        sentiment: Arc<dyn SentimentProvider>,
        quant: Arc<dyn QuantScorer>,
    ) -> Self {
        Self {
            fundamentals,
            sentiment,
            quant,
            dcf_params: DcfParams::default(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn with_dcf_params(mut self, dcf_params: DcfParams) -> Self {
        self.dcf_params = dcf_params;
        self
    }

    /// Run one evaluation for `ticker` under `weights`.
    ///
    /// Weights are normalized before any provider call, so a degenerate
    /// pair fails without wasting external requests. Provider calls run
    /// in pipeline order: fundamentals, sentiment, quant scoring; a
    /// failure at any stage aborts before the later stages are reached.
    pub async fn evaluate(
        &self,
        ticker: Ticker,
        weights: WeightSplit,
    ) -> Result<EvaluationResult, EvalError> {
        let weights = weights.normalized()?;

        let snapshot = self
            .bounded(Stage::Fundamentals, self.fundamentals.fundamentals(ticker))
            .await?;

        let sentiment = self
            .bounded(
                Stage::Sentiment,
                self.sentiment.sentiment(snapshot.ticker.clone()),
            )
            .await?;

        let features = FeatureVector::from_snapshot(&snapshot, sentiment);
        let quant_score = self.bounded(Stage::Quant, self.quant.score(features)).await?;

        let intrinsic_value =
            estimate_intrinsic_value(snapshot.free_cash_flow, &self.dcf_params)?;
        let outcome = blend(quant_score, sentiment, weights)?;

        Ok(EvaluationResult {
            ticker: snapshot.ticker,
            as_of: snapshot.as_of,
            quant_score,
            sentiment_score: sentiment,
            weights,
            final_score: outcome.final_score,
            verdict: outcome.verdict,
            intrinsic_value,
        })
    }

    async fn bounded<T>(
        &self,
        stage: Stage,
        call: impl Future<Output = Result<T, ProviderFault>>,
    ) -> Result<T, EvalError> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(fault)) => Err(ProviderError::new(stage, fault).into()),
            Err(_) => Err(ProviderError::new(
                stage,
                ProviderFault::timeout(format!(
                    "{stage} call exceeded {}ms",
                    self.call_timeout.as_millis()
                )),
            )
            .into()),
        }
    }
}
