use anyhow::Result;
use chrono::DateTime;
use chrono::Utc;

use super::ChatRecord;

#[test]
fn it_stamps_records_with_an_iso_timestamp() -> Result<()> {
    let record = ChatRecord::new("Bonjour", "Hello");
    let parsed = DateTime::parse_from_rfc3339(&record.timestamp)?;
    let age = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));

    assert!(record.timestamp.ends_with('Z'));
    assert!(age.num_seconds() < 5);

    return Ok(());
}

#[test]
fn it_keeps_short_titles() {
    let record = ChatRecord::new("Bonjour le monde", "Hello world");
    assert_eq!(record.title(), "Bonjour le monde");
}

#[test]
fn it_truncates_long_titles() {
    let record = ChatRecord::new("Привет, как у тебя сегодня дела?", "Hi");
    assert_eq!(record.title(), "Привет, как у тебя с...");
}

#[test]
fn it_serializes_with_short_field_names() -> Result<()> {
    let record = ChatRecord {
        input: "a".to_string(),
        output: "b".to_string(),
        timestamp: "2026-10-17T10:00:00.000Z".to_string(),
    };

    insta::assert_snapshot!(serde_json::to_string(&record)?, @r###"{"input":"a","output":"b","timestamp":"2026-10-17T10:00:00.000Z"}"###);

    return Ok(());
}

#[test]
fn it_falls_back_to_raw_timestamp_for_display() {
    let record = ChatRecord {
        input: "a".to_string(),
        output: "b".to_string(),
        timestamp: "yesterday".to_string(),
    };

    assert_eq!(record.display_date(), "yesterday");
}
