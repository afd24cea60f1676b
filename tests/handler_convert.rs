mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;

use affiliate_press::api::handlers::convert_handler;
use affiliate_press::state::AppState;

fn convert_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/convert", post(convert_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_convert_markdown_to_html() {
    let server = convert_server(common::create_test_state());

    let response = server
        .post("/api/convert")
        .json(&json!({
            "markdown": "# Best Headphones\n\nA short intro.",
            "formats": ["html"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["title"], "Best Headphones");

    let artifacts = json["artifacts"].as_array().unwrap();
    assert_eq!(artifacts[0]["format"], "html");
    let html = artifacts[0]["content"].as_str().unwrap();
    assert!(html.contains("<h1>Best Headphones</h1>"));
    assert!(html.contains("<p>A short intro.</p>"));
}

#[tokio::test]
async fn test_convert_multiple_formats() {
    let server = convert_server(common::create_test_state());

    let response = server
        .post("/api/convert")
        .json(&json!({
            "markdown": "# Guide\n\nText with **bold**.",
            "formats": ["html", "plain_text", "wordpress", "styled_html"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let artifacts = json["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 4);

    let by_format = |f: &str| {
        artifacts
            .iter()
            .find(|a| a["format"] == f)
            .unwrap()["content"]
            .as_str()
            .unwrap()
            .to_string()
    };

    assert!(by_format("plain_text").contains("Text with bold."));
    assert!(by_format("wordpress").contains("<!-- wp:paragraph -->"));
    assert!(by_format("styled_html").starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn test_convert_markdown_artifact_returns_source() {
    let server = convert_server(common::create_test_state());

    let markdown = "# Title\n\nParagraph body.";
    let response = server
        .post("/api/convert")
        .json(&json!({ "markdown": markdown, "formats": ["markdown"] }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["artifacts"][0]["content"], markdown);
}

#[tokio::test]
async fn test_convert_html_source() {
    let server = convert_server(common::create_test_state());

    let response = server
        .post("/api/convert")
        .json(&json!({
            "html": "<h1>From HTML</h1><p>body</p>",
            "formats": ["plain_text"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["title"], "From HTML");
    assert_eq!(json["artifacts"][0]["content"], "From HTML\n\nbody");
}

#[tokio::test]
async fn test_convert_rewrites_affiliate_links_with_tag() {
    let server = convert_server(common::create_test_state());

    let response = server
        .post("/api/convert")
        .json(&json!({
            "markdown": "[Buy now](https://www.amazon.com/dp/b08c7kg5lp)",
            "formats": ["html"],
            "associate_tag": "mysite-20"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let html = json["artifacts"][0]["content"].as_str().unwrap();
    assert!(html.contains("https://www.amazon.com/dp/B08C7KG5LP/?tag=mysite-20"));
}

#[tokio::test]
async fn test_convert_rewrites_with_configured_default_tag() {
    let server = convert_server(common::create_test_state_with_tag("default-21"));

    let response = server
        .post("/api/convert")
        .json(&json!({
            "html": r#"<a href="https://www.amazon.com/dp/B000000001">link</a>"#,
            "formats": ["html"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let html = json["artifacts"][0]["content"].as_str().unwrap();
    assert!(html.contains("tag=default-21"));
}

#[tokio::test]
async fn test_convert_rejects_both_sources() {
    let server = convert_server(common::create_test_state());

    let response = server
        .post("/api/convert")
        .json(&json!({
            "markdown": "# a",
            "html": "<p>b</p>",
            "formats": ["html"]
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_convert_rejects_missing_source() {
    let server = convert_server(common::create_test_state());

    let response = server
        .post("/api/convert")
        .json(&json!({ "formats": ["html"] }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_convert_rejects_empty_formats() {
    let server = convert_server(common::create_test_state());

    let response = server
        .post("/api/convert")
        .json(&json!({ "markdown": "# a", "formats": [] }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_convert_untitled_fallback() {
    let server = convert_server(common::create_test_state());

    let response = server
        .post("/api/convert")
        .json(&json!({ "markdown": "plain paragraph only", "formats": ["html"] }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["title"], "Untitled");
}
