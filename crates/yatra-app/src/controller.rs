use std::future::Future;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;
use yatra_core::ConversationSession;
use yatra_types::AppEvent;

use crate::display::display_loop;
use crate::events::event_loop;
use crate::io::{InputMode, watcher_io};
use crate::service::TranslationService;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_display: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64),
            app_to_display: kanal::bounded_async(256),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Task spawning and lifecycle for the line-driven modes
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    service: Arc<TranslationService>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, service: Arc<TranslationService>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            service,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        lines: AsyncReceiver<String>,
        mode: InputMode,
        session: Option<ConversationSession>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.service.clone(),
            session,
            self.channels.input_to_app.1.clone(),
            self.channels.app_to_display.0.clone(),
            self.cancel_token.clone(),
        ));

        tasks.spawn(display_loop(
            self.channels.app_to_display.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks.spawn(watcher_io(
            lines,
            mode,
            self.cancel_token.child_token(),
            self.channels.input_to_app.0.clone(),
        ));

        tasks
    }

    /// Wait for the tasks to finish on their own. The event loop ends them after
    /// the input's final `Shutdown`, so queued lines are still handled. `interrupt`
    /// or a failed task cancels everything instead.
    pub async fn supervise(
        &self,
        mut tasks: JoinSet<anyhow::Result<()>>,
        interrupt: impl Future<Output = ()>,
    ) {
        tokio::pin!(interrupt);

        loop {
            tokio::select! {
                _ = &mut interrupt => {
                    tracing::info!("Shutdown requested");
                    self.shutdown();
                    break;
                }
                result = tasks.join_next() => match result {
                    Some(result) => {
                        if !log_task_result(result) {
                            self.shutdown();
                        }
                    }
                    None => return,
                }
            }
        }

        while let Some(result) = tasks.join_next().await {
            log_task_result(result);
        }
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

/// `false` when the task failed or panicked
fn log_task_result(result: Result<anyhow::Result<()>, JoinError>) -> bool {
    match result {
        Ok(Ok(())) => {
            tracing::debug!("Task finished");
            true
        }
        Ok(Err(e)) => {
            tracing::error!("Task failed: {e}");
            false
        }
        Err(e) => {
            tracing::error!("Task panicked: {e}");
            false
        }
    }
}
