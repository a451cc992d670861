//! Upstream client tests against a mock HTTP server.

use std::time::Duration;

use cache_proxy::{
    cache::ResourceKind,
    models::{Post, Resource, Todo},
    ResourceFetcher, UpstreamClient, UpstreamError,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> UpstreamClient {
    UpstreamClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": 1, "id": 1, "title": "a", "body": "b"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = client_for(&server).fetch(ResourceKind::Post, 1).await.unwrap();
    assert_eq!(
        resource,
        Resource::Post(Post {
            user_id: 1,
            id: 1,
            title: "a".to_string(),
            body: "b".to_string(),
        })
    );
}

#[tokio::test]
async fn test_fetch_todo() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": 2, "id": 3, "title": "fugiat veniam minus", "completed": true
        })))
        .mount(&server)
        .await;

    let resource = client_for(&server).fetch(ResourceKind::Todo, 3).await.unwrap();
    assert_eq!(
        resource,
        Resource::Todo(Todo {
            user_id: 2,
            id: 3,
            title: "fugiat veniam minus".to_string(),
            completed: true,
        })
    );
}

#[tokio::test]
async fn test_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(ResourceKind::Post, 999)
        .await
        .unwrap_err();
    match err {
        UpstreamError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/posts/999"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(ResourceKind::Todo, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;
    // A post body served where a todo is expected
    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": 1, "id": 1, "title": "a", "body": "b"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(ResourceKind::Todo, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[tokio::test]
async fn test_timeout_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"userId": 1, "id": 1, "title": "a", "body": "b"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = UpstreamClient::new(server.uri(), Duration::from_millis(200)).unwrap();
    let err = client.fetch(ResourceKind::Post, 1).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Request(_)));
}

#[tokio::test]
async fn test_unreachable_upstream() {
    // Nothing listens on the discard port
    let client = UpstreamClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = client.fetch(ResourceKind::Post, 1).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Request(_)));
}
