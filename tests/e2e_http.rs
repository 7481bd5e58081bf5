// tests/e2e_http.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

use support::DraftBuilder;

#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_test_router();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, json) = support::send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "ok" }));

    let direct = editorial_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn evaluate_empty_draft_reports_every_missing_field() {
    let app = support::make_test_router();
    let req = support::json_request(
        Method::POST,
        "/api/v1/editorial/evaluate",
        &DraftBuilder::empty().build(),
    );

    let (status, json) = support::send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 0);
    assert_eq!(json["band"], "poor");
    assert_eq!(json["wordCount"], 0);
    assert_eq!(
        json["issues"],
        json!([
            "Title is missing",
            "Content is missing",
            "Meta description is missing",
            "Banner image is missing",
            "Keywords are missing"
        ])
    );
}

#[tokio::test]
async fn evaluate_accepts_an_empty_object() {
    let app = support::make_test_router();
    let req = support::json_request(Method::POST, "/api/v1/editorial/evaluate", &json!({}));

    let (status, json) = support::send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 0);
}

#[tokio::test]
async fn evaluate_complete_draft_scores_one_hundred() {
    let app = support::make_test_router();
    let req = support::json_request(
        Method::POST,
        "/api/v1/editorial/evaluate",
        &DraftBuilder::new().build(),
    );

    let (status, json) = support::send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 100);
    assert_eq!(json["band"], "good");
    assert_eq!(json["issues"], json!([]));
    assert_eq!(json["wordCount"], 800);
    let checks = json["checks"].as_array().expect("checks array");
    assert_eq!(checks.len(), 7);
    assert!(checks.iter().all(|check| check["passed"] == true));
}

#[tokio::test]
async fn evaluate_prefers_explicit_meta_description_over_excerpt() {
    let app = support::make_test_router();
    let body = DraftBuilder::new().meta_description("too short").build();
    let req = support::json_request(Method::POST, "/api/v1/editorial/evaluate", &body);

    let (_, json) = support::send_json(app, req).await;
    assert_eq!(json["score"], 90);
    assert_eq!(
        json["issues"],
        json!(["Meta description length (9 chars) - ideal is 120-160 characters"])
    );
}

#[tokio::test]
async fn evaluate_measures_plain_text_of_rich_content() {
    let app = support::make_test_router();
    let body = DraftBuilder::new()
        .content("<h2>Loans</h2><p>Compare <em>loans</em>&nbsp;today</p>")
        .keywords(&["loans"])
        .title("Apply for loans today")
        .build();
    let req = support::json_request(Method::POST, "/api/v1/editorial/evaluate", &body);

    let (_, json) = support::send_json(app, req).await;
    assert_eq!(json["wordCount"], 4);
    let issues = json["issues"].as_array().unwrap();
    assert!(
        !issues
            .iter()
            .any(|issue| issue.as_str().unwrap().starts_with("Primary keyword"))
    );
    assert!(issues.contains(&json!(
        "Content is too short (4 words) - aim for at least 300 words"
    )));
}

#[tokio::test]
async fn evaluate_names_the_missing_primary_keyword() {
    let app = support::make_test_router();
    let body = DraftBuilder::new()
        .title("Apply today")
        .content("Flexible terms")
        .keywords(&["loans"])
        .build();
    let req = support::json_request(Method::POST, "/api/v1/editorial/evaluate", &body);

    let (_, json) = support::send_json(app, req).await;
    let issues = json["issues"].as_array().unwrap();
    assert!(issues.contains(&json!("Primary keyword \"loans\" is not in the title")));
    assert!(issues.contains(&json!("Primary keyword \"loans\" is not in the content")));
}

#[tokio::test]
async fn prepare_fills_derived_fields() {
    let app = support::make_test_router();
    let body = DraftBuilder::new()
        .keywords(&[" personal loans ", "interest", "interest", "", "credit"])
        .build();
    let req = support::json_request(Method::POST, "/api/v1/editorial/prepare", &body);

    let (status, json) = support::send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["slug"],
        "a-practical-guide-to-comparing-personal-loans-in-2024"
    );
    assert_eq!(json["date"], "2024-01-01");
    assert_eq!(json["readTime"], 4);
    assert_eq!(json["metaDescription"], "e".repeat(140));
    assert_eq!(
        json["keywords"],
        json!(["personal loans", "interest", "credit"])
    );
    assert_eq!(json["evaluation"]["score"], 100);
    assert_eq!(json["published"], false);
}

#[tokio::test]
async fn prepare_keeps_explicit_slug_and_read_time() {
    let app = support::make_test_router();
    let body = DraftBuilder::new().slug("my-post").read_time(9).build();
    let req = support::json_request(Method::POST, "/api/v1/editorial/prepare", &body);

    let (status, json) = support::send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["slug"], "my-post");
    assert_eq!(json["readTime"], 9);
}

#[tokio::test]
async fn keywords_add_and_remove() {
    let app = support::make_test_router();
    let req = support::json_request(
        Method::POST,
        "/api/v1/editorial/keywords",
        &json!({ "keywords": ["loans"], "add": "  credit " }),
    );
    let (status, json) = support::send_json(app.clone(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["keywords"], json!(["loans", "credit"]));

    let req = support::json_request(
        Method::POST,
        "/api/v1/editorial/keywords",
        &json!({ "keywords": ["loans", "credit"], "remove": 0 }),
    );
    let (status, json) = support::send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["keywords"], json!(["credit"]));
}

#[tokio::test]
async fn rules_expose_default_thresholds() {
    let app = support::make_test_router();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/editorial/rules")
        .body(Body::empty())
        .unwrap();

    let (status, json) = support::send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["titleMinChars"], 40);
    assert_eq!(json["titleMaxChars"], 60);
    assert_eq!(json["contentIdealWords"], 800);
    assert_eq!(json["maxScore"], 100);
    assert_eq!(json["rules"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::make_test_router();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["paths"]["/api/v1/editorial/evaluate"].is_object());
}

#[tokio::test]
async fn evaluate_and_prepare_score_messy_keywords_identically() {
    let body = DraftBuilder::empty()
        .title("Apply today for a new personal account right now ok")
        .content("Flexible terms")
        .keywords(&["", "loans", "loans", "rates"])
        .build();

    let app = support::make_test_router();
    let evaluate = support::json_request(Method::POST, "/api/v1/editorial/evaluate", &body);
    let (status, evaluated) = support::send_json(app.clone(), evaluate).await;
    assert_eq!(status, StatusCode::OK);

    let prepare = support::json_request(Method::POST, "/api/v1/editorial/prepare", &body);
    let (status, prepared) = support::send_json(app, prepare).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(evaluated, prepared["evaluation"]);
    // title 20 + content 10 + two keywords 5; the blank chip earns nothing.
    assert_eq!(evaluated["score"], 35);
    let issues = evaluated["issues"].as_array().unwrap();
    assert!(issues.contains(&json!("Keyword count (2) - ideal is 3-8 keywords")));
    assert!(issues.contains(&json!("Primary keyword \"loans\" is not in the title")));
    assert!(issues.contains(&json!("Primary keyword \"loans\" is not in the content")));
}
