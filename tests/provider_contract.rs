//! Contract tests for the bundled adapters.
//!
//! Every adapter shipped with the crate must honor the provider
//! contracts the orchestrator relies on: in-range outputs, structured
//! faults for missing data, and deterministic offline behavior.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use stockpick_core::adapters::{
    CannedTranscripts, LexiconSentiment, LinearQuantScorer, TranscriptSource, YahooFundamentals,
};
use stockpick_core::{
    Evaluator, FaultKind, FeatureVector, FundamentalsProvider, ProviderFault, QuantScorer,
    SentimentProvider, SentimentScore, Ticker, Verdict, WeightSplit, FEATURE_SCHEMA_VERSION,
};

fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).expect("valid ticker")
}

// =============================================================================
// Fundamentals adapter (offline mode)
// =============================================================================

#[tokio::test]
async fn offline_fundamentals_are_deterministic_per_ticker() {
    let provider = YahooFundamentals::default();

    let first = provider
        .fundamentals(ticker("AAPL"))
        .await
        .expect("offline fetch succeeds");
    let second = provider
        .fundamentals(ticker("AAPL"))
        .await
        .expect("offline fetch succeeds");

    assert_eq!(first.revenue, second.revenue);
    assert_eq!(first.net_income, second.net_income);
    assert_eq!(first.free_cash_flow, second.free_cash_flow);
    assert_eq!(first.trailing_pe, second.trailing_pe);
}

#[tokio::test]
async fn offline_fundamentals_differ_across_tickers() {
    let provider = YahooFundamentals::default();

    let apple = provider
        .fundamentals(ticker("AAPL"))
        .await
        .expect("offline fetch succeeds");
    let microsoft = provider
        .fundamentals(ticker("MSFT"))
        .await
        .expect("offline fetch succeeds");

    assert_ne!(apple.revenue, microsoft.revenue);
}

#[tokio::test]
async fn offline_fundamentals_form_a_valid_snapshot() {
    let provider = YahooFundamentals::default();

    let snapshot = provider
        .fundamentals(ticker("NVDA"))
        .await
        .expect("offline fetch succeeds");

    assert_eq!(snapshot.ticker.as_str(), "NVDA");
    assert!(snapshot.revenue > 0.0);
    assert!(snapshot.shareholder_equity > 0.0);
    assert!(snapshot.return_on_equity().is_finite());
    assert!(snapshot.debt_to_equity().is_finite());
}

// =============================================================================
// Sentiment adapter
// =============================================================================

struct ScriptedTranscript(&'static str);

impl TranscriptSource for ScriptedTranscript {
    fn transcript(&self, _ticker: &Ticker) -> Option<String> {
        Some(self.0.to_owned())
    }
}

struct MissingTranscript;

impl TranscriptSource for MissingTranscript {
    fn transcript(&self, _ticker: &Ticker) -> Option<String> {
        None
    }
}

#[tokio::test]
async fn sentiment_scores_stay_in_contract_range() {
    let transcripts = [
        "Record growth, strong momentum, raised guidance, exceeded every target.",
        "Revenue decline, margin miss, impairment, restructuring, and churn.",
        "The board met on Tuesday to review the agenda.",
    ];

    for text in transcripts {
        let provider = LexiconSentiment::with_source(Arc::new(ScriptedTranscript(text)));
        let score = provider
            .sentiment(ticker("AAPL"))
            .await
            .expect("must score");
        assert!(
            (-1.0..=1.0).contains(&score.value()),
            "score {} out of range for {text:?}",
            score.value()
        );
    }
}

#[tokio::test]
async fn sentiment_orders_positive_above_negative() {
    let positive = LexiconSentiment::with_source(Arc::new(ScriptedTranscript(
        "Strong growth and record momentum, confident in continued expansion.",
    )));
    let negative = LexiconSentiment::with_source(Arc::new(ScriptedTranscript(
        "Weak quarter with a loss, headwinds, and a lowered outlook.",
    )));

    let up = positive
        .sentiment(ticker("AAPL"))
        .await
        .expect("must score");
    let down = negative
        .sentiment(ticker("AAPL"))
        .await
        .expect("must score");

    assert!(up.value() > 0.0);
    assert!(down.value() < 0.0);
}

#[tokio::test]
async fn missing_transcript_surfaces_not_found() {
    let provider = LexiconSentiment::with_source(Arc::new(MissingTranscript));

    let fault = provider
        .sentiment(ticker("ZZZZZ"))
        .await
        .expect_err("must fail");

    assert_eq!(fault.kind(), FaultKind::NotFound);
    assert!(!fault.retryable());
    assert!(fault.message().contains("ZZZZZ"));
}

#[tokio::test]
async fn canned_transcripts_cover_every_ticker() {
    let source = CannedTranscripts;
    assert!(source.transcript(&ticker("AAPL")).is_some());
    assert!(source.transcript(&ticker("BRK.B")).is_some());
}

// =============================================================================
// Quant adapter
// =============================================================================

fn reference_features(sentiment: f64) -> FeatureVector {
    FeatureVector {
        schema_version: FEATURE_SCHEMA_VERSION.to_owned(),
        revenue: 500_000.0,
        net_income: 80_000.0,
        return_on_equity: 0.4,
        debt_to_equity: 1.25,
        free_cash_flow: 75_000.0,
        trailing_pe: Some(22.0),
        sentiment,
    }
}

#[tokio::test]
async fn quant_scores_stay_in_contract_range() {
    let scorer = LinearQuantScorer::default();

    for sentiment in [-1.0, -0.3, 0.0, 0.6, 1.0] {
        let score = scorer
            .score(reference_features(sentiment))
            .await
            .expect("must score");
        assert!((0.0..=100.0).contains(&score.value()));
    }
}

#[tokio::test]
async fn quant_rejects_foreign_schema_version() {
    let scorer = LinearQuantScorer::default();
    let mut features = reference_features(0.0);
    features.schema_version = String::from("v2");

    let fault = scorer.score(features).await.expect_err("must fail");
    assert_eq!(fault.kind(), FaultKind::InvalidRequest);
    assert!(fault.message().contains("v2"));
}

#[tokio::test]
async fn quant_handles_missing_trailing_pe() {
    let scorer = LinearQuantScorer::default();
    let mut features = reference_features(0.2);
    features.trailing_pe = None;

    let score = scorer.score(features).await.expect("must score");
    assert!((0.0..=100.0).contains(&score.value()));
}

// =============================================================================
// Full offline pipeline over the bundled adapters
// =============================================================================

fn offline_evaluator() -> Evaluator {
    Evaluator::new(
        Arc::new(YahooFundamentals::default()),
        Arc::new(LexiconSentiment::default()),
        Arc::new(LinearQuantScorer::default()),
    )
}

#[tokio::test]
async fn offline_pipeline_produces_a_complete_result() {
    let evaluator = offline_evaluator();

    let result = evaluator
        .evaluate(ticker("aapl"), WeightSplit::default())
        .await
        .expect("offline evaluation succeeds");

    assert_eq!(result.ticker.as_str(), "AAPL");
    assert!((0.0..=100.0).contains(&result.quant_score.value()));
    assert!((-1.0..=1.0).contains(&result.sentiment_score.value()));
    assert!((0.0..=100.0).contains(&result.final_score));
    assert!(result.intrinsic_value.is_finite());
    assert!(matches!(
        result.verdict,
        Verdict::StrongBuy | Verdict::Hold | Verdict::Avoid
    ));
}

#[tokio::test]
async fn offline_pipeline_is_deterministic() {
    let evaluator = offline_evaluator();

    let first = evaluator
        .evaluate(ticker("MSFT"), WeightSplit::default())
        .await
        .expect("offline evaluation succeeds");
    let second = evaluator
        .evaluate(ticker("MSFT"), WeightSplit::default())
        .await
        .expect("offline evaluation succeeds");

    assert_eq!(first.final_score.to_bits(), second.final_score.to_bits());
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(
        first.intrinsic_value.to_bits(),
        second.intrinsic_value.to_bits()
    );
}

#[tokio::test]
async fn fundamentals_only_weights_ignore_sentiment_weighting() {
    let evaluator = offline_evaluator();
    let weights = WeightSplit::new(1.0, 0.0).expect("valid weights");

    let result = evaluator
        .evaluate(ticker("AAPL"), weights)
        .await
        .expect("offline evaluation succeeds");

    // With all weight on fundamentals the blend equals the quant score.
    assert!((result.final_score - result.quant_score.value()).abs() < 1e-9);
}

// =============================================================================
// Custom adapters stay swappable behind the traits
// =============================================================================

struct ConstantSentiment(f64);

impl SentimentProvider for ConstantSentiment {
    fn sentiment<'a>(
        &'a self,
        _ticker: Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<SentimentScore, ProviderFault>> + Send + 'a>> {
        let value = self.0;
        Box::pin(async move {
            SentimentScore::new(value).map_err(|error| ProviderFault::internal(error.to_string()))
        })
    }
}

#[tokio::test]
async fn third_party_sentiment_adapter_plugs_into_the_pipeline() {
    let evaluator = Evaluator::new(
        Arc::new(YahooFundamentals::default()),
        Arc::new(ConstantSentiment(0.9)),
        Arc::new(LinearQuantScorer::default()),
    );

    let result = evaluator
        .evaluate(ticker("AAPL"), WeightSplit::default())
        .await
        .expect("evaluation succeeds");

    assert!((result.sentiment_score.value() - 0.9).abs() < 1e-12);
}
