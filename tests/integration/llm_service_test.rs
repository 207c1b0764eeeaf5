// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobprep::domain::services::llm_service::{LlmService, SKILLS_PROMPT};
use jobprep::utils::errors::JobError;

fn sample_segments() -> Vec<String> {
    vec![
        "Strong Python and SQL skills required".to_string(),
        "".to_string(),
        "Free snacks provided".to_string(),
        "Responsibilities include building data pipelines".to_string(),
    ]
}

#[tokio::test]
async fn test_ask_returns_model_answer_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "- Python\n- SQL"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = LlmService::new_with_config(
        Some("test-key".to_string()),
        "gpt-3.5-turbo".to_string(),
        server.uri(),
    );

    let answer = service.ask(&sample_segments(), SKILLS_PROMPT).await.unwrap();
    assert_eq!(answer, "- Python\n- SQL");
}

#[tokio::test]
async fn test_missing_api_key_fails_before_any_request() {
    let server = MockServer::start().await;

    // No mock mounted: any request to the server would fail the test below
    let service = LlmService::new_with_config(None, "gpt-3.5-turbo".to_string(), server.uri());

    let result = service.ask(&sample_segments(), SKILLS_PROMPT).await;
    assert!(matches!(result, Err(JobError::MissingCredential)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_api_error_status_propagates_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let service = LlmService::new_with_config(
        Some("test-key".to_string()),
        "gpt-3.5-turbo".to_string(),
        server.uri(),
    );

    let result = service.ask(&sample_segments(), SKILLS_PROMPT).await;
    match result {
        Err(JobError::ModelCallFailed(message)) => {
            assert!(message.contains("500"));
        }
        other => panic!("Expected ModelCallFailed, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_unexpected_response_shape_is_a_model_call_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
        )
        .mount(&server)
        .await;

    let service = LlmService::new_with_config(
        Some("test-key".to_string()),
        "gpt-3.5-turbo".to_string(),
        server.uri(),
    );

    let result = service.ask(&sample_segments(), SKILLS_PROMPT).await;
    assert!(matches!(result, Err(JobError::ModelCallFailed(_))));
}
