use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use super::domain::{ArticleSubmission, MetricSet, ScoreReport};
use super::scoring::ReviewEngine;

/// Router builder exposing the scoring endpoint.
pub fn review_router(engine: Arc<ReviewEngine>) -> Router {
    Router::new()
        .route("/api/v1/review/score", post(score_handler))
        .with_state(engine)
}

/// Wire shape of a scoring verdict: pass flag, clamped score, feedback
/// messages in rule order, and the raw metrics for observability.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub status: bool,
    pub score: i32,
    pub feedback: Vec<String>,
    pub advanced_metrics: MetricSet,
}

impl From<ScoreReport> for ScoreResponse {
    fn from(report: ScoreReport) -> Self {
        Self {
            status: report.passed,
            score: report.score,
            feedback: report
                .feedback
                .into_iter()
                .map(|item| item.message)
                .collect(),
            advanced_metrics: report.metrics,
        }
    }
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ReviewEngine>>,
    Json(submission): Json<ArticleSubmission>,
) -> Json<ScoreResponse> {
    let report = engine.score(&submission);
    Json(ScoreResponse::from(report))
}
