use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::EventsService;
use crate::domain::models::Event;

#[tokio::test]
async fn it_emits_typed_lines_then_closes() -> Result<()> {
    let (_tx, rx) = mpsc::unbounded_channel::<Event>();
    let mut events = EventsService::new("Bonjour\n/swap\n".as_bytes(), rx);

    match events.next().await? {
        Event::UserInput(text) => assert_eq!(text, "Bonjour"),
        _ => bail!("Wrong event"),
    }
    match events.next().await? {
        Event::UserInput(text) => assert_eq!(text, "/swap"),
        _ => bail!("Wrong event"),
    }
    match events.next().await? {
        Event::InputClosed() => {}
        _ => bail!("Wrong event"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_forwards_background_events() -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let mut events = EventsService::new("".as_bytes(), rx);

    match events.next().await? {
        Event::InputClosed() => {}
        _ => bail!("Wrong event"),
    }

    tx.send(Event::LanguageDetected("fr".to_string()))?;
    match events.next().await? {
        Event::LanguageDetected(code) => assert_eq!(code, "fr"),
        _ => bail!("Wrong event"),
    }

    drop(tx);
    match events.next().await? {
        Event::InputClosed() => {}
        _ => bail!("Wrong event"),
    }

    return Ok(());
}
