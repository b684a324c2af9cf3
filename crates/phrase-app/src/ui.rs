use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use kanal::{AsyncReceiver, AsyncSender};
use phrase_core::language::{self, Listing};
use phrase_core::types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

const HELP: &str = "\
Type text and press Enter to translate it.
  :from <language>     set the source language (name or code)
  :to <language>       set the target language
  :swap                swap languages, the translation becomes the input
  :detect [text]       detect the language of text (default: last input)
  :languages [query]   list source languages, optionally filtered
  :targets [query]     list target languages, optionally filtered
  :save <path>         save the last translation to a text file
  :check               check that the translation service responds
  :status              show session state
  :help                show this help
  :quit                exit";

/// What a line typed into the terminal asks for
#[derive(Debug)]
pub enum UiCommand {
    Send(AppEvent),
    Languages {
        query: Option<String>,
        listing: Listing,
    },
    Status,
    Help,
    Quit,
    Invalid(String),
    Nothing,
}

pub fn parse_line(line: &str) -> UiCommand {
    let line = line.trim();
    if line.is_empty() {
        return UiCommand::Nothing;
    }

    let Some(command) = line.strip_prefix(':') else {
        return UiCommand::Send(AppEvent::TranslateText(line.to_string()));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (command, None),
    };

    match (name, arg) {
        ("from", Some(lang)) => UiCommand::Send(AppEvent::SetSourceLanguage(lang.to_string())),
        ("to", Some(lang)) => UiCommand::Send(AppEvent::SetTargetLanguage(lang.to_string())),
        ("from" | "to", None) => UiCommand::Invalid(format!("Usage: :{name} <language>")),
        ("swap", _) => UiCommand::Send(AppEvent::SwapLanguages),
        ("detect", text) => UiCommand::Send(AppEvent::DetectLanguage(text.map(str::to_string))),
        ("languages" | "langs", query) => UiCommand::Languages {
            query: query.map(str::to_string),
            listing: Listing::Source,
        },
        ("targets", query) => UiCommand::Languages {
            query: query.map(str::to_string),
            listing: Listing::Target,
        },
        ("save", Some(path)) => UiCommand::Send(AppEvent::SaveTranslation(PathBuf::from(path))),
        ("save", None) => UiCommand::Invalid("Usage: :save <path>".to_string()),
        ("check", _) => UiCommand::Send(AppEvent::CheckAvailability),
        ("status", _) => UiCommand::Status,
        ("help" | "h", _) => UiCommand::Help,
        ("quit" | "q" | "exit", _) => UiCommand::Quit,
        _ => UiCommand::Invalid(format!("Unknown command ':{name}', try :help")),
    }
}

/// Print an event coming from the app. Translations go to stdout, everything
/// else to stderr so output can be piped.
fn render(event: AppEvent) {
    match event {
        AppEvent::ShowTranslation { text, .. } => println!("{text}"),
        AppEvent::ShowError(err) => eprintln!("error ({}): {}", err.kind, err.message),
        AppEvent::LanguagesChanged { source, target } => eprintln!("{source} → {target}"),
        AppEvent::InputReplaced(text) => eprintln!("input: {text}"),
        AppEvent::StatusUpdate(message) => eprintln!("{message}"),
        other => tracing::debug!("ignoring event for UI: {:?}", std::mem::discriminant(&other)),
    }
}

async fn print_status(state: &AppState) {
    let (source, target, stats) = {
        let session = state.session.read().await;
        (
            session.source_language(),
            session.target_language(),
            phrase_core::stats::TextStats::of(session.input()),
        )
    };
    let max_chars = state.config.read().await.translator.max_chars;
    let status = state.status.translation.read().await.clone();

    eprintln!("{source} → {target}");
    eprintln!("input: {}", stats.counter(max_chars));
    eprintln!(
        "translations: {} completed, {} failed{}",
        status.completed_count,
        status.error_count,
        if status.translating { ", one in progress" } else { "" }
    );
    if let Some(elapsed) = status.last_completed.and_then(|t| t.elapsed().ok()) {
        eprintln!("last translation: {}s ago", elapsed.as_secs());
    }
    if let Some(kind) = status.last_error {
        eprintln!("last error: {kind}");
    }
    eprintln!("status: {}", status.current_message);
    match status.available {
        Some(true) => eprintln!("service: available"),
        Some(false) => eprintln!("service: may not be available"),
        None => eprintln!("service: not checked"),
    }
}

fn print_languages(query: Option<&str>, listing: Listing) {
    let names = language::search_names(query.unwrap_or(""), listing);
    if names.is_empty() {
        eprintln!("No matching languages");
    }
    for name in names {
        eprintln!("{name:<24} {}", language::code_for_name(name));
    }
}

/// Lines typed on stdin, read on a detached thread so a pending read never
/// holds up runtime shutdown. The channel closes at EOF.
pub fn spawn_stdin_reader(capacity: usize) -> anyhow::Result<AsyncReceiver<String>> {
    let (tx, rx) = kanal::bounded(capacity);

    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("reading stdin failed: {e}");
                        break;
                    }
                }
            }
            tracing::debug!("stdin reader finished");
        })?;

    Ok(rx.to_async())
}

/// Terminal front end: turns input lines into commands and shows app events
pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    lines: AsyncReceiver<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut reading = true;

    {
        let session = state.session.read().await;
        eprintln!(
            "Phrase Bridge: {} → {}. Type text to translate, :help for commands.",
            session.source_language(),
            session.target_language()
        );
    }

    loop {
        tokio::select! {
            // Drain app events before honouring cancellation
            biased;
            event = app_to_ui_rx.recv() => match event? {
                // App delivered everything that was in flight
                AppEvent::Shutdown => break,
                event => render(event),
            },
            line = lines.recv(), if reading => {
                let command = match line {
                    Ok(line) => parse_line(&line),
                    // Input closed
                    Err(_) => UiCommand::Quit,
                };

                match command {
                    UiCommand::Send(event) => ui_to_app_tx.send(event).await?,
                    UiCommand::Languages { query, listing } => print_languages(query.as_deref(), listing),
                    UiCommand::Status => print_status(&state).await,
                    UiCommand::Help => eprintln!("{HELP}"),
                    UiCommand::Invalid(message) => eprintln!("{message}"),
                    UiCommand::Nothing => {}
                    UiCommand::Quit => {
                        // Keep rendering until the app has delivered what is in flight
                        reading = false;
                        ui_to_app_tx.send(AppEvent::Shutdown).await?;
                    }
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    Ok(())
}
