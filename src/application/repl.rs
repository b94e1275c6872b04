#[cfg(test)]
#[path = "repl_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::io::BufReader;
use tokio::sync::mpsc;

use super::cli::format_record;
use super::cli::print_languages;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::is_auto;
use crate::domain::models::Action;
use crate::domain::models::ChatRecord;
use crate::domain::models::Event;
use crate::domain::models::LanguageOption;
use crate::domain::models::Outcome;
use crate::domain::models::SessionState;
use crate::domain::models::SlashCommand;
use crate::domain::services::actions::ActionsService;
use crate::domain::services::events::EventsService;
use crate::domain::services::Debouncer;
use crate::domain::services::History;
use crate::domain::services::Preferences;
use crate::infrastructure::capabilities::CapabilityManager;

pub fn help_text() -> String {
    let text = r#"
SESSION COMMANDS:
- Any line that isn't a command replaces the input text. The source language is detected once typing pauses.
- /translate (/t) - Translates the input and saves it to history.
- /summarize (/s) - Summarizes the input. Requires at least 150 characters.
- /swap - Swaps both languages and the input with the output.
- /source (/from) [CODE] - Sets the source language. Use `auto` to detect it.
- /target (/to) [CODE] - Sets the target language.
- /languages (/l) - Lists all selectable languages.
- /history (/hi) - Lists past translations.
- /restore (/r) [N] - Puts translation N from /history back into the input and output.
- /clear - Deletes all past translations.
- /dark (/darkmode) - Toggles dark mode.
- /quit /exit (/q) - Exit Glossa.
- /help (/h) - Provides this help menu.
        "#;

    return text.trim().to_string();
}

/// Applies a finished action. Actions are never cancelled, so the last one to
/// finish decides the output. The source only changes when it is still `auto`
/// and the action resolved it; languages picked or detected since the action
/// started are kept.
pub fn merge_outcome(state: &SessionState, outcome: &Outcome) -> SessionState {
    if outcome.notice.is_some() {
        return state.clone();
    }

    let next = state.with_output(&outcome.state.output_text);
    if outcome.state.needs_detection() {
        return next;
    }

    return next.resolve_source(&outcome.state.source_lang);
}

/// Validates a language argument. The `auto` sentinel is only valid as a
/// source.
pub fn parse_language(code: Option<&str>, allow_auto: bool) -> Option<String> {
    let code = code?.to_lowercase();
    if is_auto(&code) && !allow_auto {
        return None;
    }

    return LanguageOption::find(&code).map(|lang| return lang.code.to_string());
}

/// A 1-based history position, as printed by `/history`.
pub fn parse_position(arg: Option<&str>) -> Option<usize> {
    let position = arg?.parse::<usize>().ok()?;
    if position == 0 {
        return None;
    }

    return Some(position);
}

/// Puts a past translation back into both text areas. Languages are left as
/// they are, since records don't carry them.
pub fn restore_record(state: &SessionState, record: &ChatRecord) -> SessionState {
    return state.with_input(&record.input).with_output(&record.output);
}

pub fn format_state(state: &SessionState) -> String {
    return format!(
        "[{} -> {}]\n  input:  {}\n  output: {}",
        LanguageOption::label_for(&state.source_lang),
        LanguageOption::label_for(&state.target_lang),
        state.input_text,
        state.output_text
    );
}

fn print_notice(text: &str) {
    println!("{}", text.yellow());
}

fn print_output(text: &str, dark_mode: bool) {
    if dark_mode {
        println!("{}", text.bright_white().on_black());
    } else {
        println!("{}", text.bold());
    }
}

pub struct Repl {
    service: ActionsService,
    preferences: Preferences,
    state: SessionState,
    dark_mode: bool,
    in_flight: usize,
}

impl Repl {
    pub fn new(service: ActionsService, preferences: Preferences, state: SessionState) -> Repl {
        return Repl {
            service,
            preferences,
            state,
            dark_mode: false,
            in_flight: 0,
        };
    }

    async fn print_history(&self) -> Result<()> {
        let records = self.service.history().load_all().await?;
        if records.is_empty() {
            print_notice("There are no translations yet.");
            return Ok(());
        }

        for (idx, record) in records.iter().enumerate() {
            println!("{}", format_record(idx + 1, record));
        }

        return Ok(());
    }

    async fn restore(&mut self, arg: Option<&str>) -> Result<()> {
        let record = match parse_position(arg) {
            Some(position) => self.service.history().get(position).await?,
            None => None,
        };

        match record {
            Some(record) => {
                self.state = restore_record(&self.state, &record);
                println!("{}", format_state(&self.state));
            }
            None => print_notice("No such translation. Use /history to list them."),
        }

        return Ok(());
    }

    /// Returns true when the session should end.
    async fn handle_command(
        &mut self,
        command: SlashCommand,
        action_tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if command.is_quit() {
            return Ok(true);
        }

        if command.is_help() {
            println!("{}", help_text());
        } else if command.is_translate() {
            println!("{}", "Translating...".dimmed());
            self.in_flight += 1;
            action_tx.send(Action::Translate(self.state.clone()))?;
        } else if command.is_summarize() {
            println!("{}", "Summarizing...".dimmed());
            self.in_flight += 1;
            action_tx.send(Action::Summarize(self.state.clone()))?;
        } else if command.is_swap() {
            self.state = self.service.swap(&self.state).state;
            println!("{}", format_state(&self.state));
        } else if command.is_source() {
            match parse_language(command.arg(), true) {
                Some(code) => {
                    self.state = self.state.with_source(&code);
                    println!("Source language: {}", LanguageOption::label_for(&code));
                }
                None => print_notice("Unknown language. Use /languages to list them."),
            }
        } else if command.is_target() {
            match parse_language(command.arg(), false) {
                Some(code) => {
                    self.state = self.state.with_target(&code);
                    println!("Target language: {}", LanguageOption::label_for(&code));
                }
                None => print_notice("Unknown target language. Use /languages to list them."),
            }
        } else if command.is_languages() {
            print_languages();
        } else if command.is_history() {
            self.print_history().await?;
        } else if command.is_restore() {
            self.restore(command.arg()).await?;
        } else if command.is_clear_history() {
            self.service.history().clear().await?;
            print_notice("Cleared translation history.");
        } else if command.is_dark_mode() {
            self.dark_mode = self.preferences.toggle_dark_mode().await?;
            if self.dark_mode {
                println!("Dark mode enabled");
            } else {
                println!("Dark mode disabled");
            }
        }

        return Ok(false);
    }

    fn handle_outcome(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.state = merge_outcome(&self.state, &outcome);

        if let Some(notice) = &outcome.notice {
            print_notice(notice);
            return;
        }

        print_output(&self.state.output_text, self.dark_mode);
        if outcome.history_changed {
            println!("{}", "Saved to history.".dimmed());
        }
    }

    pub async fn start(mut self, debounce: Duration) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

        let service = self.service.clone();
        let worker = tokio::spawn(async move {
            return service.start(event_tx, &mut action_rx).await;
        });

        self.dark_mode = self.preferences.dark_mode().await?;
        let mut events = EventsService::new(BufReader::new(tokio::io::stdin()), event_rx);
        let mut debouncer = Debouncer::new(debounce);
        let mut input_closed = false;

        println!("{}", format_state(&self.state));
        println!("{}", "Type /help for commands.".dimmed());

        loop {
            if input_closed && self.in_flight == 0 {
                break;
            }

            match events.next().await? {
                Event::UserInput(line) => {
                    if let Some(command) = SlashCommand::parse(&line) {
                        if self.handle_command(command, &action_tx).await? {
                            break;
                        }
                        continue;
                    }

                    self.state = self.state.with_input(&line);
                    println!(
                        "{}",
                        format!("{} characters", line.chars().count()).dimmed()
                    );

                    let tx = action_tx.clone();
                    debouncer.schedule(async move {
                        if tx.send(Action::Detect(line)).is_err() {
                            tracing::warn!("Session closed before detection ran");
                        }
                    });
                }
                Event::LanguageDetected(code) => {
                    self.state = self.state.with_source(&code);
                    println!("Detected language: {}", LanguageOption::label_for(&code));
                }
                Event::ActionCompleted(outcome) => {
                    self.handle_outcome(outcome);
                }
                Event::InputClosed() => {
                    if debouncer.is_pending() {
                        tracing::debug!("Input closed, dropping pending detection");
                    }
                    debouncer.cancel();
                    input_closed = true;
                }
            }
        }

        debouncer.cancel();
        worker.abort();
        return Ok(());
    }
}

/// Starts an interactive session from the loaded configuration.
pub async fn start() -> Result<()> {
    let debounce = Config::get(ConfigKey::DetectDebounce).parse::<u64>()?;
    let service = ActionsService::new(CapabilityManager::orchestrator(), History::default());
    let state = SessionState::new(
        &Config::get(ConfigKey::SourceLanguage),
        &Config::get(ConfigKey::TargetLanguage),
    );

    return Repl::new(service, Preferences::default(), state)
        .start(Duration::from_millis(debounce))
        .await;
}
