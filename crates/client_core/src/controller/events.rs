//! Page actions and the completion events their dispatches produce.

use serde_json::Value;
use shared::{
    domain::{DispatchId, Endpoint, HttpMethod},
    error::DispatchError,
};

use crate::{dispatcher::DispatchRequest, view::Page, view::TargetId};

/// The four actions the page exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageAction {
    LoadGetMsg,
    LoadPostMsg,
    GetWeather,
    GetQuote,
}

impl PageAction {
    pub fn target(self) -> TargetId {
        match self {
            PageAction::LoadGetMsg => TargetId::GetGreeting,
            PageAction::LoadPostMsg => TargetId::PostGreeting,
            PageAction::GetWeather => TargetId::Weather,
            PageAction::GetQuote => TargetId::Quote,
        }
    }

    pub fn loading_message(self) -> &'static str {
        match self {
            PageAction::LoadGetMsg => "Enviando petición GET...",
            PageAction::LoadPostMsg => "Enviando petición POST...",
            PageAction::GetWeather => "Consultando información del clima...",
            PageAction::GetQuote => "Obteniendo cita inspiradora...",
        }
    }

    /// Builds the request from the page's current inputs.
    pub fn request(self, page: &Page, default_name: &str) -> DispatchRequest {
        match self {
            PageAction::LoadGetMsg => DispatchRequest::greeting(
                HttpMethod::Get,
                page.name_input(HttpMethod::Get),
                default_name,
            ),
            PageAction::LoadPostMsg => DispatchRequest::greeting(
                HttpMethod::Post,
                page.name_input(HttpMethod::Post),
                default_name,
            ),
            PageAction::GetWeather => DispatchRequest::get(Endpoint::Weather),
            PageAction::GetQuote => DispatchRequest::get(Endpoint::Quote),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineEvent {
    pub dispatch_id: DispatchId,
    pub target: TargetId,
    pub outcome: Result<Value, DispatchError>,
}
