use anyhow::Result;
use mockito::Matcher;
use test_utils::remote_translation_fixture;

use super::parse_segments;
use super::Remote;
use crate::domain::models::Translator;

#[test]
fn it_concatenates_segments_in_order() -> Result<()> {
    assert_eq!(parse_segments(remote_translation_fixture())?, "Hello world");
    return Ok(());
}

#[test]
fn it_skips_rows_without_text() -> Result<()> {
    assert_eq!(parse_segments(r#"[[[null,"x"],["Hi","Salut"]]]"#)?, "Hi");
    return Ok(());
}

#[test]
fn it_rejects_malformed_bodies() {
    assert!(parse_segments("<html>").is_err());
    assert!(parse_segments("{}").is_err());
    assert!(parse_segments("[null]").is_err());
    assert!(parse_segments("[[]]").is_err());
}

#[tokio::test]
async fn it_translates_through_the_endpoint() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client".to_string(), "gtx".to_string()),
            Matcher::UrlEncoded("sl".to_string(), "fr".to_string()),
            Matcher::UrlEncoded("tl".to_string(), "en".to_string()),
            Matcher::UrlEncoded("dt".to_string(), "t".to_string()),
            Matcher::UrlEncoded("q".to_string(), "Bonjour le monde & co?".to_string()),
        ]))
        .with_status(200)
        .with_body(remote_translation_fixture())
        .create();

    let translator = Remote::new(&server.url(), 1000);
    let res = translator
        .translate("Bonjour le monde & co?", "fr", "en")
        .await?;

    assert_eq!(res, "Hello world");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_error_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(429)
        .create();

    let translator = Remote::new(&server.url(), 1000);
    let res = translator.translate("Bonjour", "auto", "en").await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_trims_a_trailing_slash_from_the_url() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(remote_translation_fixture())
        .create();

    let translator = Remote::new(&format!("{}/", server.url()), 1000);
    let res = translator.translate("Bonjour le monde", "fr", "en").await?;

    assert_eq!(res, "Hello world");
    mock.assert();

    return Ok(());
}
