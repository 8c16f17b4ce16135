pub mod app;
#[cfg(test)]
mod app_tests;
pub mod event;
pub mod mode;
pub mod render_state;

pub use app::{App, CopyFeedback, PanelScroll, StatusLevel, StatusMessage};
pub use event::{AppEvent, CopyTarget, Panel};
pub use mode::AppMode;
pub use render_state::RenderState;
