//! Controller layer: page actions, dispatch completions and their application to the view.

pub mod events;
pub mod orchestration;

pub use events::{PageAction, PipelineEvent};
pub use orchestration::PageController;
