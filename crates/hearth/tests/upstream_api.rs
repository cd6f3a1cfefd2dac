//! Upstream client behavior against a mocked provider.

use hearth::upstream::{ChatMessage, UpstreamClient, UpstreamError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> UpstreamClient {
    UpstreamClient::new(reqwest::Client::new(), server.uri(), "sk-test")
}

#[tokio::test]
async fn chatkit_session_sends_workflow_user_and_beta_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chatkit/sessions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(header("OpenAI-Beta", "chatkit_beta=v1"))
        .and(body_partial_json(json!({
            "workflow": { "id": "wf_123" },
            "user": "visitor-1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "client_secret": "ek_abc",
            "expires_at": 1_700_000_900,
            "object": "chatkit.session",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client(&server)
        .create_chatkit_session("visitor-1", "wf_123")
        .await
        .unwrap();

    assert_eq!(session.client_secret, "ek_abc");
    assert_eq!(session.expires_at, Some(1_700_000_900));
}

#[tokio::test]
async fn provider_error_body_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chatkit/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_chatkit_session("visitor-1", "wf_123")
        .await
        .unwrap_err();

    match err {
        UpstreamError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn chat_completion_keeps_first_choice_and_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({ "model": "gpt-4o-mini" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Hello there" } },
                { "index": 1, "message": { "role": "assistant", "content": "ignored" } }
            ],
            "usage": { "prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17 }
        })))
        .mount(&server)
        .await;

    let messages = [ChatMessage {
        role: "user".to_string(),
        content: "hi".to_string(),
    }];
    let outcome = client(&server)
        .chat_completion("gpt-4o-mini", &messages)
        .await
        .unwrap();

    assert_eq!(outcome.message.content, "Hello there");
    assert_eq!(outcome.usage.unwrap().total_tokens, 17);
}

#[tokio::test]
async fn chat_completion_with_no_choices_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let messages = [ChatMessage {
        role: "user".to_string(),
        content: "hi".to_string(),
    }];
    let err = client(&server)
        .chat_completion("gpt-4o-mini", &messages)
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::EmptyCompletion));
}

#[tokio::test]
async fn realtime_session_drops_extra_provider_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/realtime/sessions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-realtime-preview",
            "voice": "alloy",
            "instructions": "Talk about the listing.",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sess_001",
            "object": "realtime.session",
            "client_secret": { "value": "eph_xyz", "expires_at": 1_700_000_060 },
            "model": "gpt-4o-realtime-preview",
            "voice": "alloy",
            "turn_detection": { "type": "server_vad" }
        })))
        .mount(&server)
        .await;

    let session = client(&server)
        .create_realtime_session(
            "gpt-4o-realtime-preview",
            "alloy",
            Some("Talk about the listing."),
        )
        .await
        .unwrap();

    assert_eq!(session.client_secret.value, "eph_xyz");
    assert_eq!(session.voice, "alloy");
}
