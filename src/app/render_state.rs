use super::app::{PanelScroll, StatusMessage};
use super::event::CopyTarget;
use super::mode::AppMode;
use crate::config::ViewTab;
use crate::token::{DecodedToken, ParseError, ParseResult};

/// Render state for UI components
///
/// A read-only view of `App` taken once per frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub mode: AppMode,
    pub token: &'a str,
    pub result: Option<&'a ParseResult>,
    pub tab: ViewTab,
    pub scroll: PanelScroll,
    pub command_input: &'a str,
    pub copied: Option<CopyTarget>,
    pub status: Option<&'a StatusMessage>,
    pub json_indent: usize,
}

impl<'a> RenderState<'a> {
    pub fn decoded(&self) -> Option<&'a DecodedToken> {
        self.result.and_then(|result| result.as_ref().ok())
    }

    pub fn error(&self) -> Option<ParseError> {
        self.result.and_then(|result| result.as_ref().err().copied())
    }

    pub fn is_copied(&self, target: CopyTarget) -> bool {
        self.copied == Some(target)
    }
}
