use crate::config::ViewTab;

/// What a copy action puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The raw token text
    Token,
    /// The decoded header, as formatted JSON
    Header,
    /// The decoded payload, as formatted JSON
    Payload,
}

/// A decoded panel that can scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Header,
    Payload,
}

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    InsertChar(char),
    DeleteChar,
    Paste(String),
    ClearToken,
    LoadExample,
    ToggleTab,
    SetTab(ViewTab),
    Copy(CopyTarget),
    ScrollUp(Panel, u16),
    ScrollDown(Panel, u16),
    LoadFile(String),
    LoadClipboard,
    EnterCommand,
    CommandChar(char),
    CommandBackspace,
    SubmitCommand,
    CancelCommand,
    Help,
    CloseHelp,
    Quit,
    InvalidCommand(String),
    None,
}
