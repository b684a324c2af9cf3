use std::path::Path;
use std::sync::Arc;

use anyhow::bail;
use atty::Stream;
use phrase_config::Config;
use phrase_core::export::SavedTranslation;
use phrase_core::language::{self, FALLBACK_CODE, FALLBACK_NAME, LanguageEntry, Listing};
use phrase_core::types::{AppEvent, TranslationRequest};
use phrase_translator::TranslationService;
use tokio::io::AsyncReadExt;
use tokio::signal;

use crate::controller::AppController;
use crate::state::AppState;
use crate::ui;

/// Unknown languages fall back to English rather than failing
fn resolve_or_fallback(query: &str, listing: Listing) -> LanguageEntry {
    language::resolve(query, listing).unwrap_or_else(|| {
        tracing::warn!("unknown language '{query}', using {FALLBACK_NAME}");
        LanguageEntry {
            name: FALLBACK_NAME,
            code: FALLBACK_CODE,
        }
    })
}

async fn input_text(text: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if atty::isnt(Stream::Stdin) {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        return Ok(buf);
    }

    bail!("No text given: pass it as an argument or pipe it on stdin")
}

pub async fn translate(
    service: &TranslationService,
    config: &Config,
    text: Option<String>,
    from: Option<String>,
    to: Option<String>,
    save: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let text = input_text(text).await?;
    let source = resolve_or_fallback(from.as_deref().unwrap_or(&config.ui.source_language), Listing::Source);
    let target = resolve_or_fallback(to.as_deref().unwrap_or(&config.ui.target_language), Listing::Target);

    let request = TranslationRequest::new(text.trim(), source.code, target.code);
    tracing::info!("translating {} -> {}", source.name, target.name);

    let translation = service.spawn_translate(request).await??;

    if json {
        println!("{}", serde_json::to_string_pretty(&translation)?);
    } else {
        println!("{}", translation.text);
    }

    if let Some(path) = save {
        SavedTranslation::new(source.name, target.name, text.trim(), translation.text.as_str())
            .save(path)?;
        eprintln!("Translation saved to {}", path.display());
    }

    Ok(())
}

pub async fn detect(service: &TranslationService, text: Option<String>) -> anyhow::Result<()> {
    let text = input_text(text).await?;
    let code = service.detect_language(&text).await?;
    let name = language::resolve(&code, Listing::Source)
        .map(|l| l.name)
        .unwrap_or("unlisted language");

    println!("{code}\t{name}");
    Ok(())
}

pub fn languages(targets: bool, search: Option<&str>) {
    let listing = if targets { Listing::Target } else { Listing::Source };
    for name in language::search_names(search.unwrap_or(""), listing) {
        println!("{name}\t{}", language::code_for_name(name));
    }
}

/// Never fails: an unreachable service is reported, not treated as an error
pub async fn check(service: &TranslationService) {
    let provider = service.provider().name;
    if service.check_availability().await {
        println!("{provider}: available");
    } else {
        println!("{provider}: may not be available");
    }
}

pub async fn interactive(service: TranslationService, config: Config) -> anyhow::Result<()> {
    let check_on_startup = config.translator.check_on_startup;
    let capacity = config.channel_capacity;

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, service, capacity);
    let lines = ui::spawn_stdin_reader(capacity)?;
    let mut tasks = controller.spawn_tasks(lines);

    if check_on_startup {
        controller.ui_sender().send(AppEvent::CheckAvailability).await?;
    }

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::debug!("session finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::debug!("task exited during shutdown: {e}");
        }
    }

    Ok(())
}
