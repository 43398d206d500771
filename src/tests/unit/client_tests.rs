//! Client fetch & decode tests against a stubbed HTTP server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::Client;
use crate::config::ClientConfig;
use crate::query::{RelationKind, WordQuery};
use crate::types::LookupError;

fn stub_client(server: &MockServer) -> Client {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .expect("mock server URI is a valid URL");
    Client::new(config)
}

// =============================================================================
// Successful Lookups
// =============================================================================

#[tokio::test]
async fn test_search_decodes_records_in_response_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .and(query_param("rel_bga", "wreak"))
        .and(query_param("max", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"word": "havoc", "score": 1001},
            {"word": "vengeance", "score": 467},
            {"word": "destruction", "score": 128}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let query = WordQuery::new()
        .related(RelationKind::Follows, "wreak")
        .max_results(10);
    let entries = stub_client(&server).search(query).await.unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].word, "havoc");
    assert_eq!(entries[1].word, "vengeance");
    assert_eq!(entries[2].word, "destruction");
}

#[tokio::test]
async fn test_search_sends_metadata_flags_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .and(query_param("ml", "ocean"))
        .and(query_param("md", "dp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = WordQuery::new()
        .means_like("ocean")
        .with_definitions()
        .with_parts_of_speech();
    let entries = stub_client(&server).search(query).await.unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_search_decodes_sparse_and_annotated_records_together() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"word": "sea"},
            {
                "word": "ocean",
                "score": 4025,
                "numSyllables": 2,
                "defs": ["n\ta large body of water"],
                "tags": ["n"]
            }
        ])))
        .mount(&server)
        .await;

    let entries = stub_client(&server)
        .search(WordQuery::new().means_like("water"))
        .await
        .unwrap();

    assert!(entries[0].score.is_none());
    assert!(entries[0].defs.is_none());
    assert_eq!(entries[1].num_syllables, Some(2));
    assert_eq!(entries[1].tags.as_ref().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_with_empty_result_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let entries = stub_client(&server)
        .search(WordQuery::new().sounds_like("zzzzzz"))
        .await
        .unwrap();

    assert!(entries.is_empty());
}

// =============================================================================
// Status Errors
// =============================================================================

#[tokio::test]
async fn test_http_500_yields_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = stub_client(&server)
        .search(WordQuery::new().means_like("ocean"))
        .await
        .unwrap_err();

    match err {
        LookupError::Status { code, body } => {
            assert_eq!(code, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_404_yields_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = stub_client(&server)
        .search(WordQuery::new().means_like("ocean"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Status { code: 404, .. }));
}

// =============================================================================
// Decode Errors
// =============================================================================

#[tokio::test]
async fn test_object_body_yields_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"word": "wreaked"})),
        )
        .mount(&server)
        .await;

    let err = stub_client(&server)
        .search(WordQuery::new().means_like("ocean"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn test_record_missing_word_yields_decode_error_not_partial_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"word": "havoc"},
            {"score": 100}
        ])))
        .mount(&server)
        .await;

    let err = stub_client(&server)
        .search(WordQuery::new().means_like("ocean"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn test_truncated_body_yields_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"word": "hav"#))
        .mount(&server)
        .await;

    let err = stub_client(&server)
        .search(WordQuery::new().means_like("ocean"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)));
}

// =============================================================================
// Transport Errors
// =============================================================================

#[tokio::test]
async fn test_unreachable_server_yields_transport_error() {
    // Bind a server to grab a free port, then shut it down so the
    // connection is refused.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let config = ClientConfig::default().with_base_url(uri).unwrap();
    let err = Client::new(config)
        .search(WordQuery::new().means_like("ocean"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)));
}
