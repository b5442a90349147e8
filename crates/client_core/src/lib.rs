//! Client side of the greeting/weather/quote page: request dispatch, display
//! targets and the formatting that turns payloads into visible text.

pub mod controller;
pub mod diagnostics;
pub mod dispatcher;
pub mod formatter;
pub mod notification;
pub mod settings;
pub mod view;

pub use controller::{PageAction, PageController, PipelineEvent};
pub use diagnostics::{DiagnosticKind, DiagnosticReport, Diagnostics};
pub use dispatcher::{DispatchRequest, HttpDispatcher, RequestDispatcher};
pub use formatter::ResponseFormatter;
pub use notification::{NotificationEvent, NotificationPhase, Notifier};
pub use settings::{ClientSettings, SettingsError};
pub use view::{DisplayTarget, Indicator, Page, RenderState, TargetId, TargetNotFound};
