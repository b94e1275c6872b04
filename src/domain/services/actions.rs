#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::summarizer::SUMMARY_MIN_CHARS;
use super::History;
use super::Orchestrator;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Outcome;
use crate::domain::models::SessionState;

pub const EMPTY_INPUT_NOTICE: &str = "Please enter your text.";
pub const SHORT_INPUT_NOTICE: &str = "Text must be more than 150 characters for summarization.";

/// The user facing actions. Capability failures never escape as errors: they
/// end up in the output text or in a notice.
#[derive(Clone)]
pub struct ActionsService {
    orchestrator: Arc<Orchestrator>,
    history: Arc<History>,
}

impl ActionsService {
    pub fn new(orchestrator: Orchestrator, history: History) -> ActionsService {
        return ActionsService {
            orchestrator: Arc::new(orchestrator),
            history: Arc::new(history),
        };
    }

    pub fn history(&self) -> &History {
        return &self.history;
    }

    /// Translates the trimmed input, resolving an `auto` source first. A
    /// successful translation is appended to history.
    pub async fn translate(&self, state: &SessionState) -> Result<Outcome> {
        let input = state.input_text.trim().to_string();
        if input.is_empty() {
            return Ok(Outcome::new(state.with_output("")));
        }

        let mut state = state.clone();
        if state.needs_detection() {
            match self.orchestrator.detect(&input).await {
                Ok(code) => {
                    state = state.resolve_source(&code);
                }
                Err(err) => {
                    return Ok(Outcome::new(state.with_output(&err.to_string())));
                }
            }
        }

        let res = self
            .orchestrator
            .translate(&input, &state.target_lang, Some(&state.source_lang))
            .await;

        match res {
            Ok(translation) => {
                self.history.append(&input, &translation).await?;

                let mut outcome = Outcome::new(state.with_output(&translation));
                outcome.history_changed = true;
                return Ok(outcome);
            }
            Err(err) => {
                return Ok(Outcome::new(state.with_output(&err.to_string())));
            }
        }
    }

    /// Summarizes the trimmed input. Inputs under the minimum length are
    /// refused with a notice and never reach a summarizer.
    pub async fn summarize(&self, state: &SessionState) -> Outcome {
        let input = state.input_text.trim().to_string();
        if input.is_empty() {
            return Outcome::with_notice(state.clone(), EMPTY_INPUT_NOTICE);
        }
        if input.chars().count() < SUMMARY_MIN_CHARS {
            return Outcome::with_notice(state.clone(), SHORT_INPUT_NOTICE);
        }

        let mut state = state.clone();
        if state.needs_detection() {
            match self.orchestrator.detect(&input).await {
                Ok(code) => {
                    state = state.resolve_source(&code);
                }
                Err(err) => {
                    return Outcome::with_notice(state, &err.to_string());
                }
            }
        }

        match self.orchestrator.summarize(&input).await {
            Ok(summary) => {
                return Outcome::new(state.with_output(&summary));
            }
            Err(err) => {
                return Outcome::new(state.with_output(&err.to_string()));
            }
        }
    }

    pub fn swap(&self, state: &SessionState) -> Outcome {
        return Outcome::new(state.swapped());
    }

    /// Detection triggered by typing. Failures are only logged.
    pub async fn detect_input(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        match self.orchestrator.detect(text).await {
            Ok(code) => {
                return Some(code);
            }
            Err(err) => {
                tracing::error!(error = ?err, "Auto language detection failed");
                return None;
            }
        }
    }

    /// Runs every action on its own task. Earlier actions are never
    /// cancelled, so whichever finishes last owns the output.
    pub async fn start(
        self,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_tx = tx.clone();
            let service = self.clone();

            match action {
                Action::Detect(text) => {
                    tokio::spawn(async move {
                        if let Some(code) = service.detect_input(&text).await {
                            worker_tx.send(Event::LanguageDetected(code))?;
                        }

                        return Ok::<(), anyhow::Error>(());
                    });
                }
                Action::Summarize(state) => {
                    tokio::spawn(async move {
                        let outcome = service.summarize(&state).await;
                        worker_tx.send(Event::ActionCompleted(outcome))?;

                        return Ok::<(), anyhow::Error>(());
                    });
                }
                Action::Translate(state) => {
                    tokio::spawn(async move {
                        let outcome = match service.translate(&state).await {
                            Ok(outcome) => outcome,
                            Err(err) => {
                                tracing::error!(error = ?err, "Failed to save translation");
                                Outcome::with_notice(
                                    state,
                                    &format!("Failed to save translation history: {err}"),
                                )
                            }
                        };
                        worker_tx.send(Event::ActionCompleted(outcome))?;

                        return Ok::<(), anyhow::Error>(());
                    });
                }
            }
        }

        return Ok(());
    }
}
