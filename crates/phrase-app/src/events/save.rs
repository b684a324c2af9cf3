use std::path::Path;

use super::{EventContext, update_status};

pub async fn handle_save(ctx: &EventContext, path: &Path) -> anyhow::Result<()> {
    let saved = ctx.state.session.read().await.saved_translation();

    let saved = match saved {
        Ok(saved) => saved,
        Err(e) => return update_status(ctx, e.to_string()).await,
    };

    match saved.save(path) {
        Ok(()) => {
            tracing::info!("translation saved to {}", path.display());
            update_status(ctx, format!("Translation saved to {}", path.display())).await
        }
        Err(e) => {
            tracing::error!("saving to {} failed: {e}", path.display());
            update_status(ctx, e.to_string()).await
        }
    }
}
