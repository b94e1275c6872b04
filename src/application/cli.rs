use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use owo_colors::OwoColorize;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatRecord;
use crate::domain::models::LanguageOption;
use crate::domain::models::Outcome;
use crate::domain::models::SessionState;
use crate::domain::models::AUTO_LANGUAGE;
use crate::domain::services::actions::ActionsService;
use crate::domain::services::History;
use crate::domain::services::LocalStorage;
use crate::domain::services::Preferences;
use crate::infrastructure::capabilities::CapabilityManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

/// One history line. `position` is 1-based and is what `/restore` takes.
pub fn format_record(position: usize, record: &ChatRecord) -> String {
    return format!(
        "{position}. {} ({})",
        record.title(),
        record.display_date()
    );
}

async fn print_history_list() -> Result<()> {
    let records = History::default()
        .load_all()
        .await?
        .iter()
        .enumerate()
        .map(|(idx, record)| return format_record(idx + 1, record))
        .collect::<Vec<String>>();

    if records.is_empty() {
        println!("There are no translations yet. You should start your first one!");
    } else {
        println!("{}", records.join("\n"));
    }

    return Ok(());
}

pub fn print_languages() {
    let lines = LanguageOption::codes()
        .iter()
        .map(|code| {
            return format!("- {code}: {}", LanguageOption::label_for(code));
        })
        .collect::<Vec<String>>();

    println!("{}", lines.join("\n"));
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

/// Text passed as arguments, or all of stdin when none was given.
async fn read_text(matches: &ArgMatches) -> Result<String> {
    if let Some(words) = matches.get_many::<String>("text") {
        return Ok(words.cloned().collect::<Vec<String>>().join(" "));
    }

    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    return Ok(text);
}

fn print_outcome(before: &SessionState, outcome: &Outcome) {
    if let Some(notice) = &outcome.notice {
        eprintln!("{}", notice.yellow());
        return;
    }

    if before.needs_detection() && !outcome.state.needs_detection() {
        eprintln!(
            "{}",
            format!(
                "Detected language: {}",
                LanguageOption::label_for(&outcome.state.source_lang)
            )
            .dimmed()
        );
    }

    println!("{}", outcome.state.output_text);
}

fn actions_service() -> ActionsService {
    return ActionsService::new(CapabilityManager::orchestrator(), History::default());
}

fn initial_state() -> SessionState {
    return SessionState::new(
        &Config::get(ConfigKey::SourceLanguage),
        &Config::get(ConfigKey::TargetLanguage),
    );
}

async fn run_translate(matches: &ArgMatches) -> Result<()> {
    let state = initial_state().with_input(&read_text(matches).await?);
    let outcome = actions_service().translate(&state).await?;
    print_outcome(&state, &outcome);

    return Ok(());
}

async fn run_summarize(matches: &ArgMatches) -> Result<()> {
    let state = initial_state().with_input(&read_text(matches).await?);
    let outcome = actions_service().summarize(&state).await;
    print_outcome(&state, &outcome);

    return Ok(());
}

async fn run_detect(matches: &ArgMatches) -> Result<()> {
    let text = read_text(matches).await?;
    if text.trim().is_empty() {
        bail!("Please enter your text.");
    }

    let code = CapabilityManager::orchestrator()
        .detect(text.trim())
        .await?;
    println!("{code}");

    return Ok(());
}

async fn run_dark_mode(matches: &ArgMatches) -> Result<()> {
    let preferences = Preferences::new(LocalStorage::default());
    let enabled = match matches.subcommand() {
        Some(("enable", _)) => {
            preferences.set_dark_mode(true).await?;
            true
        }
        Some(("disable", _)) => {
            preferences.set_dark_mode(false).await?;
            false
        }
        Some(("toggle", _)) => preferences.toggle_dark_mode().await?,
        _ => preferences.dark_mode().await?,
    };

    if enabled {
        println!("Dark mode is enabled");
    } else {
        println!("Dark mode is disabled");
    }

    return Ok(());
}

fn arg_text() -> Arg {
    return Arg::new("text")
        .help("Text to process. Read from stdin when omitted.")
        .num_args(1..)
        .required(false);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Glossa")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Glossa with environment variable RUST_LOG=glossa")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_history() -> Command {
    return Command::new("history")
        .about("Manage past translations.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List past translations, oldest first."))
        .subcommand(Command::new("clear").about("Delete every past translation. This can't be undone."))
        .subcommand(Command::new("path").about("Print the local storage file path."));
}

fn subcommand_dark_mode() -> Command {
    return Command::new("dark-mode")
        .about("Show or change the persisted dark mode preference.")
        .subcommand(Command::new("enable").about("Turn dark mode on."))
        .subcommand(Command::new("disable").about("Turn dark mode off."))
        .subcommand(Command::new("toggle").about("Flip dark mode."))
        .subcommand(Command::new("status").about("Print whether dark mode is on."));
}

fn arg_source_language() -> Arg {
    return Arg::new(ConfigKey::SourceLanguage.to_string())
        .short('s')
        .long(ConfigKey::SourceLanguage.to_string())
        .env("GLOSSA_SOURCE_LANGUAGE")
        .num_args(1)
        .help(format!(
            "Initial source language. [default: {}]",
            Config::default(ConfigKey::SourceLanguage)
        ))
        .value_parser(PossibleValuesParser::new(LanguageOption::codes()))
        .global(true);
}

fn arg_target_language() -> Arg {
    let targets = LanguageOption::codes()
        .into_iter()
        .filter(|code| return *code != AUTO_LANGUAGE)
        .collect::<Vec<&str>>();

    return Arg::new(ConfigKey::TargetLanguage.to_string())
        .short('t')
        .long(ConfigKey::TargetLanguage.to_string())
        .env("GLOSSA_TARGET_LANGUAGE")
        .num_args(1)
        .help(format!(
            "Initial target language. [default: {}]",
            Config::default(ConfigKey::TargetLanguage)
        ))
        .value_parser(PossibleValuesParser::new(targets))
        .global(true);
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("glossa")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(super::repl::help_text())
        .arg_required_else_help(false)
        .subcommand(Command::new("session").about("Start an interactive session. This is the default."))
        .subcommand(Command::new("translate").about("Translate text and record it in history.").arg(arg_text()))
        .subcommand(Command::new("summarize").about("Summarize text of at least 150 characters.").arg(arg_text()))
        .subcommand(Command::new("detect").about("Detect the language of text.").arg(arg_text()))
        .subcommand(Command::new("languages").about("List the selectable languages."))
        .subcommand(subcommand_history())
        .subcommand(subcommand_dark_mode())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(arg_source_language())
        .arg(arg_target_language())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("GLOSSA_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::DataDir.to_string())
                .long(ConfigKey::DataDir.to_string())
                .env("GLOSSA_DATA_DIR")
                .num_args(1)
                .help(format!("Directory holding local storage (translation history and preferences). [default: {}]", Config::default(ConfigKey::DataDir)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::DetectDebounce.to_string())
                .long(ConfigKey::DetectDebounce.to_string())
                .env("GLOSSA_DETECT_DEBOUNCE")
                .num_args(1)
                .help(format!("Milliseconds of input inactivity before the source language is detected. [default: {}]", Config::default(ConfigKey::DetectDebounce)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::LibreTranslateToken.to_string())
                .long(ConfigKey::LibreTranslateToken.to_string())
                .env("GLOSSA_LIBRETRANSLATE_TOKEN")
                .num_args(1)
                .help("API key for the LibreTranslate server.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::LibreTranslateURL.to_string())
                .long(ConfigKey::LibreTranslateURL.to_string())
                .env("GLOSSA_LIBRETRANSLATE_URL")
                .num_args(1)
                .help("LibreTranslate compatible server used for detection and translation before the fallbacks.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Model.to_string())
                .short('m')
                .long(ConfigKey::Model.to_string())
                .env("GLOSSA_MODEL")
                .num_args(1)
                .help("Ollama model used for summaries.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OllamaURL.to_string())
                .long(ConfigKey::OllamaURL.to_string())
                .env("GLOSSA_OLLAMA_URL")
                .num_args(1)
                .help("Ollama API URL used for summaries before the extractive fallback.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RequestTimeout.to_string())
                .long(ConfigKey::RequestTimeout.to_string())
                .env("GLOSSA_REQUEST_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds before timing out requests to translation services. [default: {}]", Config::default(ConfigKey::RequestTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::TranslateURL.to_string())
                .long(ConfigKey::TranslateURL.to_string())
                .env("GLOSSA_TRANSLATE_URL")
                .num_args(1)
                .help(format!("Base URL of the remote translate endpoint used as the translation fallback. [default: {}]", Config::default(ConfigKey::TranslateURL)))
                .global(true),
        );
}

/// Handles one-shot subcommands. Returns true when the interactive session
/// should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir()
                        .unwrap_or_else(std::env::temp_dir)
                        .join("glossa/debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("languages", _)) => {
            print_languages();
            return Ok(false);
        }
        Some(("translate", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            run_translate(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("summarize", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            run_summarize(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("detect", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            run_detect(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("dark-mode", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            run_dark_mode(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("history", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("list", _)) => {
                    print_history_list().await?;
                }
                Some(("clear", _)) => {
                    History::default().clear().await?;
                    println!("Cleared translation history");
                }
                Some(("path", _)) => {
                    let path = LocalStorage::default().file_path;
                    println!("{}", path.to_string_lossy());
                }
                _ => {
                    subcommand_history().print_long_help()?;
                }
            }
            return Ok(false);
        }
        Some(("session", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
