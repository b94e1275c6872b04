use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use super::DetectResponse;
use super::LibreTranslate;
use super::TranslateResponse;
use crate::domain::models::Detector;
use crate::domain::models::Translator;

impl LibreTranslate {
    fn with_url(url: String, token: &str) -> LibreTranslate {
        return LibreTranslate {
            url,
            token: token.to_string(),
            timeout: "200".to_string(),
        };
    }
}

#[tokio::test]
async fn it_detects_the_most_confident_language() -> Result<()> {
    let body = serde_json::to_string(&vec![
        DetectResponse {
            language: "es".to_string(),
            confidence: 12.0,
        },
        DetectResponse {
            language: "fr".to_string(),
            confidence: 90.0,
        },
    ])?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/detect")
        .match_body(Matcher::Json(json!({ "q": "Bonjour le monde" })))
        .with_status(200)
        .with_body(body)
        .create();

    let detector = LibreTranslate::with_url(server.url(), "");
    let res = detector.detect("Bonjour le monde").await?;

    assert_eq!(res, "fr");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_returns_no_language_without_candidates() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/detect")
        .with_status(200)
        .with_body("[]")
        .create();

    let detector = LibreTranslate::with_url(server.url(), "");
    let res = detector.detect("???").await?;

    assert_eq!(res, "");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_translates_with_an_api_key() -> Result<()> {
    let body = serde_json::to_string(&TranslateResponse {
        translated_text: "Hello world".to_string(),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/translate")
        .match_body(Matcher::Json(json!({
            "q": "Bonjour le monde",
            "source": "fr",
            "target": "en",
            "format": "text",
            "api_key": "secret",
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let translator = LibreTranslate::with_url(server.url(), "secret");
    let res = translator.translate("Bonjour le monde", "fr", "en").await?;

    assert_eq!(res, "Hello world");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_translation_on_error_status() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/translate").with_status(500).create();

    let translator = LibreTranslate::with_url(server.url(), "");
    let res = translator.translate("Bonjour", "auto", "en").await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_fails_without_a_url() {
    let detector = LibreTranslate::with_url("".to_string(), "");
    assert!(detector.detect("Bonjour").await.is_err());
}
