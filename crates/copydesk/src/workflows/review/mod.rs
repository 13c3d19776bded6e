pub mod analyzers;
pub mod domain;
pub mod normalizer;
mod router;
pub mod scoring;

pub use domain::{ArticleSubmission, FeedbackItem, MetricSet, ScoreReport};
pub use router::{review_router, ScoreResponse};
pub use scoring::{ReviewEngine, ScoringConfig};
