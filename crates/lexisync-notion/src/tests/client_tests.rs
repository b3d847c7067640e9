use lexisync_config::notion::NotionConfig;
use lexisync_core::LexError;

use super::canned_server;
use crate::{EntryProperties, EntryStore, NotionClient};

fn client(api_url: String) -> NotionClient {
    let config = NotionConfig {
        api_url,
        database_id: "db-1".to_string(),
        token: "secret".to_string(),
        ..NotionConfig::default()
    };
    NotionClient::new(reqwest::Client::new(), config)
}

fn properties() -> EntryProperties {
    EntryProperties {
        word: "Test".to_string(),
        parts_of_speech: vec!["Noun".to_string()],
        informations: None,
    }
}

#[tokio::test]
async fn bad_request_on_query_is_invalid_database_id() {
    let url = canned_server("400 Bad Request", r#"{"object":"error","status":400}"#).await;
    let error = client(url).query("Test").await.unwrap_err();

    assert!(matches!(
        error,
        LexError::InvalidDestinationId { ref database_id } if database_id == "db-1"
    ));
}

#[tokio::test]
async fn unauthorized_on_query_is_invalid_credential() {
    let url = canned_server("401 Unauthorized", r#"{"object":"error","status":401}"#).await;
    let error = client(url).query("Test").await.unwrap_err();

    assert!(matches!(error, LexError::InvalidCredential));
}

#[tokio::test]
async fn other_failure_status_is_transport_error() {
    let url = canned_server("500 Internal Server Error", "{}").await;
    let error = client(url).query("Test").await.unwrap_err();

    assert!(matches!(error, LexError::Transport(_)));
    assert!(!error.is_domain());
}

#[tokio::test]
async fn unparseable_query_body_is_malformed_response() {
    let url = canned_server("200 OK", r#"{"object":"list"}"#).await;
    let error = client(url).query("Test").await.unwrap_err();

    assert!(matches!(error, LexError::MalformedResponse(_)));
}

#[tokio::test]
async fn query_results_are_read_from_the_response() {
    let url = canned_server(
        "200 OK",
        r#"{"results":[{"id":"page-1","properties":{"Word":{"title":[{"plain_text":"Test"}]}}}],"has_more":false}"#,
    )
    .await;
    let entries = client(url).query("Test").await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "page-1");
    assert_eq!(entries[0].word, "Test");
}

#[tokio::test]
async fn create_returns_the_page_id() {
    let url = canned_server("200 OK", r#"{"object":"page","id":"page-9"}"#).await;
    let created = client(url).create(&properties()).await.unwrap();

    assert_eq!(created.as_deref(), Some("page-9"));
}

#[tokio::test]
async fn unparseable_create_body_falls_back_to_no_id() {
    let url = canned_server("200 OK", "not json").await;
    let created = client(url).create(&properties()).await.unwrap();

    assert_eq!(created, None);
}

#[tokio::test]
async fn failed_update_is_transport_error() {
    let url = canned_server("404 Not Found", r#"{"object":"error","status":404}"#).await;
    let error = client(url).update("page-1", &properties()).await.unwrap_err();

    assert!(matches!(error, LexError::Transport(_)));
}
