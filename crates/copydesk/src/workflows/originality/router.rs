use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;

use super::{MatchResult, OriginalityService, PlagiarismReport};
use crate::workflows::review::domain::ArticleSubmission;

/// Router builder exposing the originality endpoint.
pub fn originality_router(service: Arc<OriginalityService>) -> Router {
    Router::new()
        .route("/api/v1/review/originality", post(originality_handler))
        .with_state(service)
}

/// Wire shape of an originality verdict: `status` is true when the
/// submission looks original.
#[derive(Debug, Serialize)]
pub struct OriginalityResponse {
    pub status: bool,
    pub matches: Vec<MatchView>,
}

#[derive(Debug, Serialize)]
pub struct MatchView {
    pub sentence: String,
    pub source: String,
    pub similarity: f64,
}

impl From<PlagiarismReport> for OriginalityResponse {
    fn from(report: PlagiarismReport) -> Self {
        Self {
            status: report.original_likely,
            matches: report.matches.into_iter().map(MatchView::from).collect(),
        }
    }
}

impl From<MatchResult> for MatchView {
    fn from(result: MatchResult) -> Self {
        Self {
            sentence: result.sentence_excerpt,
            source: result.source_url,
            similarity: result.similarity,
        }
    }
}

pub(crate) async fn originality_handler(
    State(service): State<Arc<OriginalityService>>,
    Json(submission): Json<ArticleSubmission>,
) -> Response {
    // The gateway loop blocks on sequential network calls; keep it off
    // the async workers.
    let joined = tokio::task::spawn_blocking(move || service.check(&submission)).await;

    match joined {
        Ok(report) => Json(OriginalityResponse::from(report)).into_response(),
        Err(err) => {
            let payload = json!({ "error": format!("originality check aborted: {err}") });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
