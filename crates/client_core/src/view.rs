//! Display targets and the four render-state operations applied to them.

use std::collections::HashMap;

use serde::Serialize;
use shared::domain::HttpMethod;
use thiserror::Error;

/// Typed handle for each region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetId {
    GetGreeting,
    PostGreeting,
    Weather,
    Quote,
}

impl TargetId {
    pub const ALL: [TargetId; 4] = [
        TargetId::GetGreeting,
        TargetId::PostGreeting,
        TargetId::Weather,
        TargetId::Quote,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            TargetId::GetGreeting => "getrespmsg",
            TargetId::PostGreeting => "postrespmsg",
            TargetId::Weather => "weather-result",
            TargetId::Quote => "quote-result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderState {
    Idle,
    Loading { message: String },
    Success { payload: String },
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("display target `{}` not found", .0.element_id())]
pub struct TargetNotFound(pub TargetId);

/// One page region: its visible text and at most one indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTarget {
    id: TargetId,
    content: String,
    indicator: Option<Indicator>,
}

impl DisplayTarget {
    pub fn new(id: TargetId) -> Self {
        Self {
            id,
            content: String::new(),
            indicator: None,
        }
    }

    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn indicator(&self) -> Option<Indicator> {
        self.indicator
    }

    pub fn is_loading(&self) -> bool {
        self.indicator == Some(Indicator::Loading)
    }

    pub fn state(&self) -> RenderState {
        match self.indicator {
            None => RenderState::Idle,
            Some(Indicator::Loading) => RenderState::Loading {
                message: self.content.clone(),
            },
            Some(Indicator::Success) => RenderState::Success {
                payload: self.content.clone(),
            },
            Some(Indicator::Error) => RenderState::Error {
                message: self.content.clone(),
            },
        }
    }

    pub fn set_loading(&mut self, message: impl Into<String>) {
        self.content = message.into();
        self.indicator = Some(Indicator::Loading);
    }

    /// Drops the loading indicator only; content stays as written.
    pub fn clear_loading(&mut self) {
        if self.is_loading() {
            self.indicator = None;
        }
    }

    pub fn set_success(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.indicator = Some(Indicator::Success);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.content = message.into();
        self.indicator = Some(Indicator::Error);
    }
}

/// The view layer: owns every display target and the two name inputs.
#[derive(Debug, Clone)]
pub struct Page {
    targets: HashMap<TargetId, DisplayTarget>,
    get_name: String,
    post_name: String,
}

impl Page {
    pub fn new() -> Self {
        Self::with_targets(TargetId::ALL)
    }

    pub fn with_targets(ids: impl IntoIterator<Item = TargetId>) -> Self {
        Self {
            targets: ids
                .into_iter()
                .map(|id| (id, DisplayTarget::new(id)))
                .collect(),
            get_name: String::new(),
            post_name: String::new(),
        }
    }

    pub fn target(&self, id: TargetId) -> Result<&DisplayTarget, TargetNotFound> {
        self.targets.get(&id).ok_or(TargetNotFound(id))
    }

    pub fn target_mut(&mut self, id: TargetId) -> Result<&mut DisplayTarget, TargetNotFound> {
        self.targets.get_mut(&id).ok_or(TargetNotFound(id))
    }

    pub fn targets(&self) -> impl Iterator<Item = &DisplayTarget> {
        TargetId::ALL
            .into_iter()
            .filter_map(|id| self.targets.get(&id))
    }

    pub fn name_input(&self, method: HttpMethod) -> &str {
        match method {
            HttpMethod::Get => &self.get_name,
            HttpMethod::Post => &self.post_name,
        }
    }

    pub fn set_name_input(&mut self, method: HttpMethod, value: impl Into<String>) {
        match method {
            HttpMethod::Get => self.get_name = value.into(),
            HttpMethod::Post => self.post_name = value.into(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
