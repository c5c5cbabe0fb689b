use serde::{Deserialize, Serialize};

use crate::{FundamentalsSnapshot, SentimentScore};

/// Version tag for the quant-scoring feature schema.
///
/// Bump when fields are added, removed, or reordered; scorers reject
/// vectors whose version they do not understand.
pub const FEATURE_SCHEMA_VERSION: &str = "v1";

/// Explicit feature vector handed to a [`QuantScorer`](crate::QuantScorer).
///
/// Named fields in a fixed order replace ad hoc string-keyed maps so the
/// provider contract is statically checkable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub schema_version: String,
    pub revenue: f64,
    pub net_income: f64,
    pub return_on_equity: f64,
    pub debt_to_equity: f64,
    pub free_cash_flow: f64,
    pub trailing_pe: Option<f64>,
    pub sentiment: f64,
}

impl FeatureVector {
    pub fn from_snapshot(snapshot: &FundamentalsSnapshot, sentiment: SentimentScore) -> Self {
        Self {
            schema_version: FEATURE_SCHEMA_VERSION.to_owned(),
            revenue: snapshot.revenue,
            net_income: snapshot.net_income,
            return_on_equity: snapshot.return_on_equity(),
            debt_to_equity: snapshot.debt_to_equity(),
            free_cash_flow: snapshot.free_cash_flow,
            trailing_pe: snapshot.trailing_pe,
            sentiment: sentiment.value(),
        }
    }

    /// Canonical `(name, value)` view for scorers that want a mapping.
    /// Order is fixed and matches the field declaration order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("revenue", Some(self.revenue)),
            ("net_income", Some(self.net_income)),
            ("return_on_equity", Some(self.return_on_equity)),
            ("debt_to_equity", Some(self.debt_to_equity)),
            ("free_cash_flow", Some(self.free_cash_flow)),
            ("trailing_pe", self.trailing_pe),
            ("sentiment", Some(self.sentiment)),
        ]
    }
}
