use phrase_core::types::AppEvent;

use super::{EventContext, update_status};

/// Probe in the background; the answer arrives as `AvailabilityChecked`
pub async fn handle_check_availability(ctx: &EventContext) -> anyhow::Result<()> {
    let service = ctx.service.clone();
    let inbox = ctx.inbox.clone();

    tokio::spawn(async move {
        let available = service.check_availability().await;
        if let Err(e) = inbox.send(AppEvent::AvailabilityChecked(available)).await {
            tracing::warn!("dropping availability result: {e}");
        }
    });

    Ok(())
}

pub async fn handle_availability_checked(ctx: &EventContext, available: bool) -> anyhow::Result<()> {
    ctx.state.status.translation.write().await.available = Some(available);

    if available {
        tracing::info!("translation service is reachable");
        update_status(ctx, "Translation service is available").await
    } else {
        tracing::warn!("translation service availability check failed");
        update_status(ctx, "Translation service may not be available").await
    }
}
