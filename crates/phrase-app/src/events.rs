use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use phrase_core::types::AppEvent;
use phrase_translator::TranslationService;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod availability;
pub mod languages;
pub mod save;
pub mod translate;

use availability::{handle_availability_checked, handle_check_availability};
use languages::{
    handle_detect_language, handle_language_detected, handle_set_source, handle_set_target,
    handle_swap,
};
use save::handle_save;
use translate::{handle_translate_text, handle_translation_finished};

/// Channels a handler may talk to
pub struct EventContext {
    pub state: Arc<AppState>,
    pub service: TranslationService,
    /// Back into the event loop; workers report completions here
    pub inbox: AsyncSender<AppEvent>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
}

/// App's main loop
pub async fn event_loop(
    ctx: EventContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut shutting_down = false;

    tracing::debug!("event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::trace!("event received: {:?}", std::mem::discriminant(&event));

        if let AppEvent::Shutdown = event {
            shutting_down = true;
        } else {
            handle_events(&ctx, event).await?;
        }

        // Let the outstanding request land before closing
        if shutting_down && !ctx.state.session.read().await.is_translating() {
            break;
        }
    }

    tracing::debug!("event loop finished");
    if shutting_down {
        // Last event the front end sees
        ctx.app_to_ui_tx.send(AppEvent::Shutdown).await?;
    }
    Ok(())
}

async fn handle_events(ctx: &EventContext, event: AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::TranslateText(text) => {
            handle_translate_text(ctx, text).await?;
        }
        AppEvent::TranslationFinished { id, result } => {
            handle_translation_finished(ctx, id, result).await?;
        }
        AppEvent::SetSourceLanguage(query) => {
            handle_set_source(ctx, &query).await?;
        }
        AppEvent::SetTargetLanguage(query) => {
            handle_set_target(ctx, &query).await?;
        }
        AppEvent::SwapLanguages => {
            handle_swap(ctx).await?;
        }
        AppEvent::DetectLanguage(text) => {
            handle_detect_language(ctx, text).await?;
        }
        AppEvent::LanguageDetected(result) => {
            handle_language_detected(ctx, result).await?;
        }
        AppEvent::CheckAvailability => {
            handle_check_availability(ctx).await?;
        }
        AppEvent::AvailabilityChecked(available) => {
            handle_availability_checked(ctx, available).await?;
        }
        AppEvent::SaveTranslation(path) => {
            handle_save(ctx, &path).await?;
        }
        AppEvent::Shutdown => {}
        AppEvent::ShowTranslation { .. }
        | AppEvent::ShowError(_)
        | AppEvent::LanguagesChanged { .. }
        | AppEvent::InputReplaced(_)
        | AppEvent::StatusUpdate(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}

/// Record the message and forward it to the front end
pub(crate) async fn update_status(ctx: &EventContext, message: impl Into<String>) -> anyhow::Result<()> {
    let message = message.into();
    ctx.state.status.translation.write().await.current_message = message.clone();
    ctx.app_to_ui_tx.send(AppEvent::StatusUpdate(message)).await?;
    Ok(())
}
