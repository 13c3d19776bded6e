//! Integration specifications for the article scoring workflow.
//!
//! Scenarios exercise the public engine facade and the HTTP router end to
//! end: a repetitive fact-free draft must fail with itemized feedback, and
//! a long, fact-dense, varied article must clear the gate.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use copydesk::workflows::review::{
    review_router, ArticleSubmission, ReviewEngine, ScoringConfig,
};
use tower::ServiceExt;

const REPETITIVE_DRAFT: &str =
    "The product is good. The product is nice. The product works well. \
     The product is good. The product is nice. The product works well. \
     The product is good. The product is nice. The product works well. \
     The product is good. The product is nice. The product works well. \
     The product is good. The product is nice. The product works well.";

fn fact_dense_article() -> String {
    let mut sentences = Vec::new();
    for i in 0..55 {
        sentences.push(format!(
            "I gauged unit{i} at {}mAh while reviewer{i} logged gain{i} of {} points across bench{i} run{i} against spec{i} during trial{i}.",
            4000 + i,
            10 + i,
        ));
    }
    sentences.join(" ")
}

#[test]
fn repetitive_fact_free_draft_fails_with_itemized_feedback() {
    let engine = ReviewEngine::new(ScoringConfig::default());
    let report = engine.score(&ArticleSubmission::new(REPETITIVE_DRAFT));

    assert!(!report.passed);
    assert!(report.score <= 40);

    let messages: Vec<&str> = report
        .feedback
        .iter()
        .map(|item| item.message.as_str())
        .collect();
    assert!(messages.iter().any(|m| m.contains("too short")));
    assert!(messages.iter().any(|m| m.contains("window entropy")));
    assert!(messages.iter().any(|m| m.contains("names or figures")));
}

#[test]
fn fact_dense_varied_article_clears_the_gate() {
    let engine = ReviewEngine::new(ScoringConfig::default());
    let report = engine.score(&ArticleSubmission::titled(
        "Bench results",
        fact_dense_article(),
    ));

    assert!(report.passed, "feedback: {:?}", report.feedback);
    assert!(report.score >= 85);
    assert!(report.feedback.is_empty());

    assert!(report.metrics.word_count >= 450);
    assert!(report.metrics.window_entropy > 8.5);
    assert!(report.metrics.entity_density >= 0.09);
    assert!(report.metrics.type_token_ratio > 0.39);
}

#[test]
fn score_is_always_within_bounds() {
    let engine = ReviewEngine::new(ScoringConfig::default());
    let inputs = [
        String::new(),
        "word".to_string(),
        "!!! ??? ...".to_string(),
        "again ".repeat(1200),
        REPETITIVE_DRAFT.to_string(),
        fact_dense_article(),
    ];

    for content in inputs {
        let report = engine.score(&ArticleSubmission::new(content));
        assert!((0..=100).contains(&report.score));
    }
}

#[tokio::test]
async fn score_endpoint_returns_the_wire_shape() {
    let engine = Arc::new(ReviewEngine::new(ScoringConfig::default()));
    let app = review_router(engine);

    let submission = ArticleSubmission::new(REPETITIVE_DRAFT);
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/review/score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&submission).expect("submission serializes"),
        ))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("body is JSON");

    assert_eq!(payload["status"], serde_json::Value::Bool(false));
    assert!(payload["score"].is_i64());
    assert!(payload["feedback"].is_array());
    assert!(payload["advanced_metrics"]["window_entropy"].is_number());
    assert!(payload["advanced_metrics"]["type_token_ratio"].is_number());
}
