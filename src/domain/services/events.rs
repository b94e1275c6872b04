#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::Lines;
use tokio::sync::mpsc;

use crate::domain::models::Event;

/// Merges typed lines with events coming back from background actions.
pub struct EventsService<R: AsyncBufRead + Unpin> {
    input: Lines<R>,
    input_open: bool,
    events: mpsc::UnboundedReceiver<Event>,
}

impl<R: AsyncBufRead + Unpin> EventsService<R> {
    pub fn new(input: R, events: mpsc::UnboundedReceiver<Event>) -> EventsService<R> {
        return EventsService {
            input: input.lines(),
            input_open: true,
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => Some(event),
                    None if !self.input_open => Some(Event::InputClosed()),
                    None => None,
                },
                line = self.input.next_line(), if self.input_open => match line? {
                    Some(text) => Some(Event::UserInput(text)),
                    None => {
                        self.input_open = false;
                        Some(Event::InputClosed())
                    }
                },
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
