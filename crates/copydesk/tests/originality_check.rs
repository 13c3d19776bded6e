//! Integration specifications for the originality check workflow.
//!
//! Stub gateways stand in for the search collaborator so the scenarios can
//! pin down call volume, fail-open behavior, and match ordering without
//! network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use copydesk::workflows::originality::{
    OriginalityService, SearchError, SearchGateway, SearchHit,
};
use copydesk::workflows::review::ArticleSubmission;

/// Records every query and echoes it back as the snippet of a canned hit.
#[derive(Default)]
struct EchoGateway {
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl SearchGateway for EchoGateway {
    fn top_result(&self, query: &str) -> Result<Option<SearchHit>, SearchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .expect("query mutex poisoned")
            .push(query.to_string());
        Ok(Some(SearchHit {
            snippet: query.to_string(),
            url: format!("https://archive.example/{call}"),
        }))
    }
}

/// Fails every call, as if the collaborator were unreachable.
#[derive(Default)]
struct UnreachableGateway {
    calls: AtomicUsize,
}

impl SearchGateway for UnreachableGateway {
    fn top_result(&self, _query: &str) -> Result<Option<SearchHit>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SearchError::Backend {
            status: 503,
            body: "upstream offline".to_string(),
        })
    }
}

/// Returns one fixed snippet for every query.
struct CannedGateway {
    snippet: &'static str,
    url: &'static str,
}

impl SearchGateway for CannedGateway {
    fn top_result(&self, _query: &str) -> Result<Option<SearchHit>, SearchError> {
        Ok(Some(SearchHit {
            snippet: self.snippet.to_string(),
            url: self.url.to_string(),
        }))
    }
}

#[test]
fn generic_short_sentences_never_reach_the_collaborator() {
    let gateway = Arc::new(EchoGateway::default());
    let service = OriginalityService::new(gateway.clone());

    let report = service.check(&ArticleSubmission::new(
        "The desk met today. Coffee ran out fast. Nobody wrote much.",
    ));

    assert!(report.original_likely);
    assert!(report.matches.is_empty());
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unreachable_collaborator_fails_open() {
    let gateway = Arc::new(UnreachableGateway::default());
    let service = OriginalityService::new(gateway.clone());

    let report = service.check(&ArticleSubmission::new(
        "Phone X launched with 5000mAh battery in 2024 ahead of rivals. \
         The handset also bundles 67 watt charging for the European market.",
    ));

    assert!(report.original_likely);
    assert!(report.matches.is_empty());
    // Both candidates were attempted; one failure never aborts the rest.
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn copied_sentence_produces_exactly_one_match() {
    let gateway = CannedGateway {
        snippet: "Reviewers noted Phone X launched with 5000mAh battery in 2024",
        url: "https://archive.example/phone-x",
    };
    let service = OriginalityService::new(Arc::new(gateway));

    let report = service.check(&ArticleSubmission::new(
        "Phone X launched with 5000mAh battery in 2024 ahead of rivals.",
    ));

    assert!(!report.original_likely);
    assert_eq!(report.matches.len(), 1);

    let found = &report.matches[0];
    assert!(found.similarity >= 60.0);
    assert_eq!(found.source_url, "https://archive.example/phone-x");
    assert!(found.sentence_excerpt.ends_with("..."));
}

#[test]
fn below_threshold_overlap_is_not_a_match() {
    let gateway = CannedGateway {
        snippet: "battery tests in 2024 covered wildly different handsets entirely",
        url: "https://archive.example/unrelated",
    };
    let service = OriginalityService::new(Arc::new(gateway));

    let report = service.check(&ArticleSubmission::new(
        "Phone X launched with 5000mAh battery in 2024 ahead of rivals.",
    ));

    assert!(report.original_likely);
    assert!(report.matches.is_empty());
}

#[test]
fn match_order_mirrors_candidate_ranking() {
    let gateway = Arc::new(EchoGateway::default());
    let service = OriginalityService::new(gateway.clone());

    // The digit-and-name sentence outranks the digit-only one even though
    // it appears later in the text.
    let report = service.check(&ArticleSubmission::new(
        "The print run covered 12 regional editions before dawn broke. \
         Analysts at Vertex logged 20000 preorders within the first 48 hours.",
    ));

    assert_eq!(report.matches.len(), 2);
    assert!(report.matches[0].sentence_excerpt.contains("Vertex"));
    assert!(report.matches[1].sentence_excerpt.contains("print run"));
}

#[test]
fn queries_are_truncated_to_the_collaborator_limit() {
    let gateway = Arc::new(EchoGateway::default());
    let service = OriginalityService::new(gateway.clone());

    let long_sentence = format!(
        "Candidate {} stretched the ballot recount across 19 precincts overnight",
        "deliberation ".repeat(12)
    );
    service.check(&ArticleSubmission::new(long_sentence));

    let queries = gateway.queries.lock().expect("query mutex poisoned");
    assert_eq!(queries.len(), 1);
    assert!(queries[0].chars().count() <= 100);
}
