use std::sync::Arc;
use std::time::Duration;

use stockpick_core::adapters::{LexiconSentiment, LinearQuantScorer, YahooFundamentals};
use stockpick_core::http_client::ReqwestHttpClient;
use stockpick_core::{EvaluationResult, Evaluator, Ticker, WeightSplit};

use crate::cli::EvaluateArgs;
use crate::error::CliError;

pub async fn run(
    args: &EvaluateArgs,
    timeout_ms: u64,
    mock: bool,
) -> Result<EvaluationResult, CliError> {
    let ticker = Ticker::parse(&args.ticker)?;
    let weights = WeightSplit::new(args.weight_fundamentals, args.weight_sentiment)?;

    let fundamentals = if mock {
        YahooFundamentals::default()
    } else {
        YahooFundamentals::with_http_client(Arc::new(ReqwestHttpClient::new()))
    };

    let evaluator = Evaluator::new(
        Arc::new(fundamentals),
        Arc::new(LexiconSentiment::default()),
        Arc::new(LinearQuantScorer::default()),
    )
    .with_call_timeout(Duration::from_millis(timeout_ms));

    evaluator
        .evaluate(ticker, weights)
        .await
        .map_err(CliError::from)
}
