//! Dispatch orchestration from page actions to display-target updates.

use std::sync::Arc;

use shared::domain::DispatchId;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    controller::events::{PageAction, PipelineEvent},
    diagnostics::Diagnostics,
    dispatcher::RequestDispatcher,
    formatter::{format_error, ResponseFormatter},
    view::{Page, TargetId, TargetNotFound},
};

const EVENT_QUEUE_CAPACITY: usize = 64;

/// Owns the page and applies completed dispatches to it in arrival order.
///
/// Overlapping dispatches against one target are not coordinated: whichever
/// completion is applied last decides the target's final state.
pub struct PageController {
    dispatcher: Arc<dyn RequestDispatcher>,
    page: Page,
    default_name: String,
    diagnostics: Diagnostics,
    events_tx: mpsc::Sender<PipelineEvent>,
    events_rx: mpsc::Receiver<PipelineEvent>,
}

impl PageController {
    pub fn new(
        dispatcher: Arc<dyn RequestDispatcher>,
        page: Page,
        default_name: impl Into<String>,
        diagnostics: Diagnostics,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
        Self {
            dispatcher,
            page,
            default_name: default_name.into(),
            diagnostics,
            events_tx,
            events_rx,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn load_get_msg(&mut self) -> Result<DispatchId, TargetNotFound> {
        self.trigger(PageAction::LoadGetMsg)
    }

    pub fn load_post_msg(&mut self) -> Result<DispatchId, TargetNotFound> {
        self.trigger(PageAction::LoadPostMsg)
    }

    pub fn get_weather(&mut self) -> Result<DispatchId, TargetNotFound> {
        self.trigger(PageAction::GetWeather)
    }

    pub fn get_quote(&mut self) -> Result<DispatchId, TargetNotFound> {
        self.trigger(PageAction::GetQuote)
    }

    /// Marks the action's target as loading and spawns its dispatch. Returns
    /// without waiting for the response.
    pub fn trigger(&mut self, action: PageAction) -> Result<DispatchId, TargetNotFound> {
        let target_id = action.target();
        let request = action.request(&self.page, &self.default_name);
        let target = self.page.target_mut(target_id).map_err(|err| {
            warn!(?action, error = %err, "action aborted");
            err
        })?;
        target.set_loading(action.loading_message());

        let dispatch_id = DispatchId::new();
        let label = format!("{} {}", request.method, request.endpoint);
        debug!(?action, dispatch_id = %dispatch_id.0, "queued dispatch");

        let dispatcher = self.dispatcher.clone();
        let events_tx = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = dispatcher.dispatch(&request).await;
            let _ = events_tx
                .send(PipelineEvent {
                    dispatch_id,
                    target: target_id,
                    outcome,
                })
                .await;
        });
        self.diagnostics.watch(handle, label);

        Ok(dispatch_id)
    }

    pub async fn next_event(&mut self) -> Option<PipelineEvent> {
        self.events_rx.recv().await
    }

    /// Non-blocking poll for a completed dispatch.
    pub fn try_next_event(&mut self) -> Option<PipelineEvent> {
        self.events_rx.try_recv().ok()
    }

    pub fn apply(&mut self, event: PipelineEvent) -> Result<TargetId, TargetNotFound> {
        let target = self.page.target_mut(event.target).map_err(|err| {
            warn!(dispatch_id = %event.dispatch_id.0, error = %err, "completion dropped");
            err
        })?;
        target.clear_loading();

        match event.outcome {
            Ok(payload) => {
                info!(element = target.id().element_id(), "dispatch succeeded");
                target.set_success(ResponseFormatter::for_target(event.target).format(&payload));
            }
            Err(err) => {
                warn!(element = target.id().element_id(), error = ?err, "dispatch failed");
                target.set_error(format_error(&err.to_string()));
            }
        }

        Ok(event.target)
    }

    /// Waits for the next completion and applies it.
    pub async fn settle_next(&mut self) -> Option<Result<TargetId, TargetNotFound>> {
        let event = self.next_event().await?;
        Some(self.apply(event))
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
