use super::Outcome;

/// Results flowing back into the interactive session loop.
#[derive(Debug)]
pub enum Event {
    ActionCompleted(Outcome),
    LanguageDetected(String),
    UserInput(String),
    InputClosed(),
}
