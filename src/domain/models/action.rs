use super::SessionState;

/// Work requested by the interactive session. Each one runs on its own task.
#[derive(Debug)]
pub enum Action {
    Detect(String),
    Summarize(SessionState),
    Translate(SessionState),
}
