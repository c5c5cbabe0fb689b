//! Result rendering for the terminal.

use stockpick_core::EvaluationResult;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    result: &EvaluationResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{rendered}");
        }
        OutputFormat::Text => {
            println!("Ticker:            {}", result.ticker);
            println!("Quant score:       {:.2}/100", result.quant_score.value());
            println!(
                "Earnings sentiment: {:.2} (-1 to 1)",
                result.sentiment_score.value()
            );
            println!(
                "Weights:           {:.0}% fundamentals / {:.0}% sentiment",
                result.weights.fundamentals * 100.0,
                result.weights.sentiment * 100.0
            );
            println!("Final score:       {:.2}/100", result.final_score);
            println!("Intrinsic value:   ${:.2}", result.intrinsic_value);
            println!("Verdict:           {}", result.verdict);
        }
    }

    Ok(())
}
