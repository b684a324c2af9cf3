use phrase_core::language::{self, Listing};
use phrase_core::types::{AppEvent, ServiceError};

use super::{EventContext, update_status};

async fn languages_changed(ctx: &EventContext) -> anyhow::Result<()> {
    let (source, target) = {
        let session = ctx.state.session.read().await;
        (
            session.source_language().to_string(),
            session.target_language().to_string(),
        )
    };

    ctx.app_to_ui_tx
        .send(AppEvent::LanguagesChanged { source, target })
        .await?;
    Ok(())
}

pub async fn handle_set_source(ctx: &EventContext, query: &str) -> anyhow::Result<()> {
    let result = ctx.state.session.write().await.set_source_language(query);
    match result {
        Ok(name) => {
            tracing::debug!("source language set to {name}");
            languages_changed(ctx).await
        }
        Err(e) => update_status(ctx, e.to_string()).await,
    }
}

pub async fn handle_set_target(ctx: &EventContext, query: &str) -> anyhow::Result<()> {
    let result = ctx.state.session.write().await.set_target_language(query);
    match result {
        Ok(name) => {
            tracing::debug!("target language set to {name}");
            languages_changed(ctx).await
        }
        Err(e) => update_status(ctx, e.to_string()).await,
    }
}

pub async fn handle_swap(ctx: &EventContext) -> anyhow::Result<()> {
    let result = ctx.state.session.write().await.swap();
    match result {
        Ok(replaced) => {
            languages_changed(ctx).await?;
            if let Some(input) = replaced {
                ctx.app_to_ui_tx.send(AppEvent::InputReplaced(input)).await?;
            }
            Ok(())
        }
        Err(e) => update_status(ctx, e.to_string()).await,
    }
}

pub async fn handle_detect_language(ctx: &EventContext, text: Option<String>) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => ctx.state.session.read().await.input().to_string(),
    };

    let service = ctx.service.clone();
    let inbox = ctx.inbox.clone();
    tokio::spawn(async move {
        let result = service.detect_language(&text).await;
        if let Err(e) = inbox.send(AppEvent::LanguageDetected(result)).await {
            tracing::warn!("dropping detection result: {e}");
        }
    });

    Ok(())
}

pub async fn handle_language_detected(
    ctx: &EventContext,
    result: Result<String, ServiceError>,
) -> anyhow::Result<()> {
    match result {
        Ok(code) => {
            let name = language::resolve(&code, Listing::Source)
                .map(|l| l.name)
                .unwrap_or("unlisted language");
            update_status(ctx, format!("Detected language: {name} ({code})")).await
        }
        Err(err) => {
            update_status(ctx, format!("Error: {err}")).await?;
            ctx.app_to_ui_tx.send(AppEvent::ShowError(err)).await?;
            Ok(())
        }
    }
}
