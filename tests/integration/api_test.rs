// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::{Extension, Router};
use std::sync::Arc;
use tower::ServiceExt;

use jobprep::domain::services::job_service::JobService;
use jobprep::presentation::routes;

use super::helpers::{MockFetcher, MockLlm, MockRepository, SAMPLE_URL};

fn test_app(fetcher: MockFetcher, llm: MockLlm) -> Router {
    let service = Arc::new(JobService::new(
        Arc::new(MockRepository::new()),
        Arc::new(fetcher),
        Arc::new(llm),
    ));
    routes::routes().layer(Extension(service))
}

async fn post_job(app: Router, url_value: &str) -> (StatusCode, serde_json::Value) {
    let body = serde_json::json!({ "url": url_value }).to_string();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/jobs")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(MockFetcher::new(), MockLlm::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_submit_returns_complete_record() {
    let app = test_app(MockFetcher::new(), MockLlm::new());

    let (status, body) = post_job(app, SAMPLE_URL).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["job"]["company_name"], "Acme Corp");
    assert_eq!(body["job"]["job_title"], "Backend Engineer");
    assert_eq!(body["job"]["location"], "Berlin");
    assert!(body["job"]["skills"].is_string());
    assert!(body["job"]["interview_questions"].is_string());
    assert!(body["job"]["interviewer_questions"].is_string());
}

#[tokio::test]
async fn test_empty_url_prompts_for_input() {
    let app = test_app(MockFetcher::new(), MockLlm::new());

    let (status, body) = post_job(app, "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Job URL is required");
}

#[tokio::test]
async fn test_malformed_url_is_a_bad_request() {
    let app = test_app(MockFetcher::new(), MockLlm::new());

    let (status, body) = post_job(app, "https://example.com/jobs/view/123").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid LinkedIn job URL"));
}

#[tokio::test]
async fn test_sign_in_wall_maps_to_service_unavailable() {
    let app = test_app(MockFetcher::with_sign_in_wall(), MockLlm::new());

    let (status, body) = post_job(app, SAMPLE_URL).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("sign in"));
}
