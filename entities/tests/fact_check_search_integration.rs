//! End-to-end test for the external fact-check aggregation search.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;
use studio_entities::fact_checks::{
    FactCheckAction, FactCheckQuery, FactCheckReducer, FactCheckState,
};
use studio_entities::mocks::RecordingNotifier;
use studio_entities::{EntityEnvironment, RestClient};
use studio_runtime::Store;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn search_embeds_results_in_request_log() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fact-check/google"))
        .and(query_param("query", "moon"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "nodes": [{
                "text": "the moon is made of cheese",
                "claimant": "anonymous",
                "review": [{
                    "publisher": "Checker",
                    "url": "https://example.com/moon",
                    "title": "No, the moon is not cheese",
                    "rating": "False"
                }]
            }],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = EntityEnvironment::new(
        RestClient::new(server.uri()),
        Arc::new(RecordingNotifier::new()),
    );
    let store = Store::new(FactCheckState::default(), FactCheckReducer::new(), env);

    let outcome = store
        .send_and_wait_for(
            FactCheckAction::Search {
                query: FactCheckQuery {
                    query: "moon".to_owned(),
                    language: Some("en".to_owned()),
                    page: None,
                },
            },
            |a| matches!(a, FactCheckAction::SearchLoaded { .. } | FactCheckAction::Failed { .. }),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
    assert!(matches!(outcome, FactCheckAction::SearchLoaded { .. }));

    let state = store.state(Clone::clone).await;
    assert!(!state.loading);
    assert_eq!(state.req.len(), 1);
    assert_eq!(state.req[0].total, 1);
    assert_eq!(state.req[0].data[0].review[0].rating, "False");
}
