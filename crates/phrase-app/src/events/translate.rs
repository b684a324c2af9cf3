use std::time::SystemTime;

use phrase_core::stats::TextStats;
use phrase_core::types::{AppEvent, ErrorKind, ServiceError};
use uuid::Uuid;

use super::{EventContext, update_status};

pub async fn handle_translate_text(ctx: &EventContext, text: String) -> anyhow::Result<()> {
    let request = {
        let mut session = ctx.state.session.write().await;
        if session.is_translating() {
            None
        } else {
            session.set_input(text);
            session.begin().ok()
        }
    };

    let Some(request) = request else {
        tracing::debug!("translate ignored, request already in flight");
        return update_status(ctx, "A translation is already in progress").await;
    };

    ctx.state.status.translation.write().await.translating = true;
    update_status(ctx, "Translating...").await?;

    let id = request.id;
    let handle = ctx.service.spawn_translate(request);
    let inbox = ctx.inbox.clone();

    // Exactly one completion per request, even if the worker panics
    tokio::spawn(async move {
        let result = match handle.await {
            Ok(result) => result.map(|translation| translation.text),
            Err(e) => {
                tracing::error!("translation worker {id} failed: {e}");
                Err(ServiceError::new(
                    ErrorKind::UnknownError,
                    format!("Translation failed: {e}"),
                ))
            }
        };

        if let Err(e) = inbox.send(AppEvent::TranslationFinished { id, result }).await {
            tracing::warn!("dropping completion for {id}: {e}");
        }
    });

    Ok(())
}

pub async fn handle_translation_finished(
    ctx: &EventContext,
    id: Uuid,
    result: Result<String, ServiceError>,
) -> anyhow::Result<()> {
    let (accepted, from_lang, to_lang) = {
        let mut session = ctx.state.session.write().await;
        let accepted = session.finish(id, result.as_ref().ok().cloned());
        (
            accepted,
            session.source_language().to_string(),
            session.target_language().to_string(),
        )
    };

    if !accepted {
        tracing::debug!("stale completion {id} dropped");
        return Ok(());
    }

    {
        let mut status = ctx.state.status.translation.write().await;
        status.translating = false;
        match &result {
            Ok(_) => {
                status.completed_count += 1;
                status.last_completed = Some(SystemTime::now());
            }
            Err(err) => {
                status.error_count += 1;
                status.last_error = Some(err.kind);
            }
        }
    }

    match result {
        Ok(text) => {
            let stats = TextStats::of(&text);
            tracing::info!("translation {id} completed: {from_lang} -> {to_lang}, {stats}");

            ctx.app_to_ui_tx
                .send(AppEvent::ShowTranslation {
                    text,
                    from_lang,
                    to_lang,
                })
                .await?;
            update_status(ctx, format!("Translation completed successfully ({stats})")).await?;
        }
        Err(err) => {
            update_status(ctx, format!("Error: {err}")).await?;
            ctx.app_to_ui_tx.send(AppEvent::ShowError(err)).await?;
        }
    }

    Ok(())
}
