use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use phrase_core::types::AppEvent;
use phrase_translator::TranslationService;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{EventContext, event_loop};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    service: TranslationService,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, service: TranslationService, capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(capacity),
            state,
            service,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, lines: AsyncReceiver<String>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        self.spawn_event_loop(&mut tasks);
        self.spawn_ui(&mut tasks, lines);
        tasks
    }

    pub fn spawn_event_loop(&self, tasks: &mut JoinSet<anyhow::Result<()>>) {
        let ctx = EventContext {
            state: self.state.clone(),
            service: self.service.clone(),
            inbox: self.channels.ui_to_app.0.clone(),
            app_to_ui_tx: self.channels.app_to_ui.0.clone(),
        };

        tasks.spawn(event_loop(
            ctx,
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));
    }

    pub fn spawn_ui(&self, tasks: &mut JoinSet<anyhow::Result<()>>, lines: AsyncReceiver<String>) {
        tasks.spawn(ui_loop(
            self.state.clone(),
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            lines,
            self.cancel_token.child_token(),
        ));
    }

    /// Sender a front end uses to reach the event loop
    pub fn ui_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.ui_to_app.0.clone()
    }

    /// Receiver for events the event loop emits to the front end
    #[cfg(test)]
    pub fn ui_receiver(&self) -> AsyncReceiver<AppEvent> {
        self.channels.app_to_ui.1.clone()
    }

    #[cfg(test)]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
