use std::path::Path;
use std::time::Instant;

use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

use super::event::{AppEvent, CopyTarget, Panel};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::config::{DisplayConfig, ViewTab};
use crate::input::{self, Clipboard, SystemClipboard};
use crate::token::{self, format_json, DecodedToken, ParseResult, EXAMPLE_TOKEN};
use crate::ui::command::{command_to_app_event, parse_command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One-line message shown in the command deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }
}

/// Marks the panel whose contents were just copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    pub target: CopyTarget,
    pub at: Instant,
}

/// Scroll offsets of the decoded panels, in lines (JSON) or rows (table).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelScroll {
    pub header: u16,
    pub payload: u16,
}

impl PanelScroll {
    pub fn get(self, panel: Panel) -> u16 {
        match panel {
            Panel::Header => self.header,
            Panel::Payload => self.payload,
        }
    }

    fn get_mut(&mut self, panel: Panel) -> &mut u16 {
        match panel {
            Panel::Header => &mut self.header,
            Panel::Payload => &mut self.payload,
        }
    }
}

/// All viewer state. Owned by the event loop, mutated only via `handle_event`
/// and `tick`.
pub struct App {
    mode: AppMode,
    token: String,
    result: Option<ParseResult>,
    tab: ViewTab,
    scroll: PanelScroll,
    command_input: String,
    copied: Option<CopyFeedback>,
    status: Option<StatusMessage>,
    config: DisplayConfig,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(config: DisplayConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(config: DisplayConfig, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            mode: AppMode::Editing,
            token: String::new(),
            result: None,
            tab: config.default_tab,
            scroll: PanelScroll::default(),
            command_input: String::new(),
            copied: None,
            status: None,
            config,
            clipboard,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `None` while the input is blank.
    pub fn result(&self) -> Option<&ParseResult> {
        self.result.as_ref()
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn scroll(&self) -> PanelScroll {
        self.scroll
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn copied(&self) -> Option<CopyTarget> {
        self.copied.map(|feedback| feedback.target)
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Replace the token text and re-parse it.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
        self.reparse();
    }

    fn reparse(&mut self) {
        self.scroll = PanelScroll::default();
        if self.token.trim().is_empty() {
            self.result = None;
            return;
        }

        let result = token::parse(&self.token);
        match &result {
            Ok(decoded) => tracing::debug!(
                signature_len = decoded.signature.len(),
                "token decoded"
            ),
            Err(error) => tracing::debug!(%error, "token rejected"),
        }
        self.result = Some(result);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::InsertChar(c) => {
                self.token.push(c);
                self.reparse();
            }
            AppEvent::DeleteChar => {
                if let Some((idx, _)) = self.token.grapheme_indices(true).next_back() {
                    self.token.truncate(idx);
                    self.reparse();
                }
            }
            AppEvent::Paste(text) => {
                self.token.push_str(&text);
                self.reparse();
            }
            AppEvent::ClearToken => {
                self.set_token(String::new());
                self.status = None;
            }
            AppEvent::LoadExample => {
                self.set_token(EXAMPLE_TOKEN);
                self.status = Some(StatusMessage::info("Loaded example token"));
            }
            AppEvent::ToggleTab => self.set_tab(self.tab.toggled()),
            AppEvent::SetTab(tab) => self.set_tab(tab),
            AppEvent::Copy(target) => self.copy(target, Instant::now()),
            AppEvent::ScrollUp(panel, lines) => {
                let offset = self.scroll.get_mut(panel);
                *offset = offset.saturating_sub(lines);
            }
            AppEvent::ScrollDown(panel, lines) => {
                let limit = self.scroll_limit(panel);
                let offset = self.scroll.get_mut(panel);
                *offset = offset.saturating_add(lines).min(limit);
            }
            AppEvent::LoadFile(path) => match input::file::load(Path::new(&path)) {
                Ok(token) => {
                    self.set_token(token);
                    self.status = Some(StatusMessage::info(format!("Loaded token from {path}")));
                }
                Err(e) => {
                    tracing::warn!(%path, error = %e, "file load failed");
                    self.status = Some(StatusMessage::warning(e.to_string()));
                }
            },
            AppEvent::LoadClipboard => match self.clipboard.get_text() {
                Ok(text) => {
                    self.set_token(text.trim());
                    self.status = Some(StatusMessage::info("Loaded token from clipboard"));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard read failed");
                    self.status = Some(StatusMessage::warning(e.to_string()));
                }
            },
            AppEvent::EnterCommand => {
                self.command_input.clear();
                self.mode = AppMode::Command;
            }
            AppEvent::CommandChar(c) => self.command_input.push(c),
            AppEvent::CommandBackspace => {
                if let Some((idx, _)) = self.command_input.grapheme_indices(true).next_back() {
                    self.command_input.truncate(idx);
                }
            }
            AppEvent::SubmitCommand => {
                let input = std::mem::take(&mut self.command_input);
                self.mode = AppMode::Editing;
                self.status = None;
                let event = command_to_app_event(parse_command(&input));
                self.handle_event(event);
            }
            AppEvent::CancelCommand => {
                self.command_input.clear();
                self.mode = AppMode::Editing;
            }
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::CloseHelp => self.mode = AppMode::Editing,
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::InvalidCommand(input) => {
                let text = if input.is_empty() {
                    "Empty command, type :h for help".to_string()
                } else {
                    format!("Unknown command: {input}")
                };
                self.status = Some(StatusMessage::warning(text));
            }
            AppEvent::None => {}
        }
    }

    /// Expire the copy marker once `copy_feedback` has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(feedback) = self.copied {
            if now.saturating_duration_since(feedback.at) >= self.config.copy_feedback {
                self.copied = None;
            }
        }
    }

    fn set_tab(&mut self, tab: ViewTab) {
        self.tab = tab;
        self.scroll = PanelScroll::default();
    }

    fn decoded(&self) -> Option<&DecodedToken> {
        self.result.as_ref().and_then(|result| result.as_ref().ok())
    }

    /// Last line (JSON) or row (table) a panel may scroll to.
    fn scroll_limit(&self, panel: Panel) -> u16 {
        let Some(decoded) = self.decoded() else {
            return 0;
        };
        let value = match panel {
            Panel::Header => &decoded.header,
            Panel::Payload => &decoded.payload,
        };

        let len = match (self.tab, value) {
            (ViewTab::Json, _) => format_json(value, self.config.json_indent).lines().count(),
            (ViewTab::Table, Value::Object(map)) => map.len(),
            (ViewTab::Table, Value::Array(items)) => items.len(),
            (ViewTab::Table, _) => 0,
        };
        u16::try_from(len.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn copy(&mut self, target: CopyTarget, now: Instant) {
        let indent = self.config.json_indent;
        let decoded = self.decoded();

        let text = match target {
            CopyTarget::Token if !self.token.is_empty() => Some(self.token.clone()),
            CopyTarget::Token => None,
            CopyTarget::Header => decoded.map(|d| format_json(&d.header, indent)),
            CopyTarget::Payload => decoded.map(|d| format_json(&d.payload, indent)),
        };

        let Some(text) = text else {
            self.status = Some(StatusMessage::warning("Nothing to copy"));
            return;
        };

        match self.clipboard.set_text(&text) {
            Ok(()) => {
                self.copied = Some(CopyFeedback { target, at: now });
            }
            Err(e) => {
                tracing::warn!(?target, error = %e, "copy failed");
                self.status = Some(StatusMessage::warning(format!("Copy failed: {e}")));
            }
        }
    }

    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            mode: self.mode,
            token: &self.token,
            result: self.result.as_ref(),
            tab: self.tab,
            scroll: self.scroll,
            command_input: &self.command_input,
            copied: self.copied(),
            status: self.status.as_ref(),
            json_indent: self.config.json_indent,
        }
    }
}
