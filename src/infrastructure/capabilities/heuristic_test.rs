use anyhow::Result;

use super::ScriptHeuristic;
use crate::domain::models::Detector;

#[tokio::test]
async fn it_detects_cyrillic_as_russian() -> Result<()> {
    let detector = ScriptHeuristic::default();
    assert_eq!(detector.detect("Привет, мир").await?, "ru");
    assert_eq!(detector.detect("Hello Ёлка").await?, "ru");
    return Ok(());
}

#[tokio::test]
async fn it_detects_everything_else_as_english() -> Result<()> {
    let detector = ScriptHeuristic::default();
    assert_eq!(detector.detect("Bonjour le monde").await?, "en");
    assert_eq!(detector.detect("").await?, "en");
    return Ok(());
}
