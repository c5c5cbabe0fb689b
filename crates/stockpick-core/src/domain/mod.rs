mod features;
mod fundamentals;
mod score;
mod ticker;
mod timestamp;

pub use features::{FeatureVector, FEATURE_SCHEMA_VERSION};
pub use fundamentals::FundamentalsSnapshot;
pub use score::{EvaluationResult, QuantScore, SentimentScore, Verdict, WeightSplit};
pub use ticker::Ticker;
pub use timestamp::UtcDateTime;
