use std::future::Future;
use std::pin::Pin;

use crate::provider::{ProviderFault, QuantScorer};
use crate::{FeatureVector, QuantScore, FEATURE_SCHEMA_VERSION};

/// Fixed linear quality model over the canonical feature order, squashed
/// to [0, 100] with a logistic. Stands in for a pretrained artifact
/// behind the same scoring contract; coefficients favor profitability
/// and cash generation and penalize leverage and rich multiples.
#[derive(Debug, Clone)]
pub struct LinearQuantScorer {
    bias: f64,
    roe_weight: f64,
    margin_weight: f64,
    leverage_weight: f64,
    fcf_weight: f64,
    pe_weight: f64,
    sentiment_weight: f64,
}

impl Default for LinearQuantScorer {
    fn default() -> Self {
        Self {
            bias: -0.4,
            roe_weight: 4.0,
            margin_weight: 3.0,
            leverage_weight: -0.35,
            fcf_weight: 2.5,
            pe_weight: -0.02,
            sentiment_weight: 0.8,
        }
    }
}

impl LinearQuantScorer {
    fn evaluate(&self, features: &FeatureVector) -> Result<f64, ProviderFault> {
        if features.schema_version != FEATURE_SCHEMA_VERSION {
            return Err(ProviderFault::invalid_request(format!(
                "unsupported feature schema '{}', expected '{}'",
                features.schema_version, FEATURE_SCHEMA_VERSION
            )));
        }
        if features.revenue == 0.0 {
            return Err(ProviderFault::invalid_request(
                "feature vector has zero revenue; margins are undefined",
            ));
        }

        let net_margin = features.net_income / features.revenue;
        let fcf_margin = features.free_cash_flow / features.revenue;
        let pe = features.trailing_pe.unwrap_or(0.0);

        let z = self.bias
            + self.roe_weight * features.return_on_equity
            + self.margin_weight * net_margin
            + self.leverage_weight * features.debt_to_equity
            + self.fcf_weight * fcf_margin
            + self.pe_weight * pe
            + self.sentiment_weight * features.sentiment;

        if !z.is_finite() {
            return Err(ProviderFault::invalid_request(
                "feature vector produced a non-finite activation",
            ));
        }

        Ok(100.0 / (1.0 + (-z).exp()))
    }
}

impl QuantScorer for LinearQuantScorer {
    fn score<'a>(
        &'a self,
        features: FeatureVector,
    ) -> Pin<Box<dyn Future<Output = Result<QuantScore, ProviderFault>> + Send + 'a>> {
        Box::pin(async move {
            let value = self.evaluate(&features)?;
            QuantScore::new(value).map_err(|error| ProviderFault::internal(error.to_string()))
        })
    }
}
