use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppEvent, AppMode, CopyTarget, Panel};

const PAGE: u16 = 10;

/// Translate a key press into an event for the current mode.
pub fn key_to_event(mode: AppMode, key: KeyEvent) -> AppEvent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match mode {
        AppMode::Editing => editing_key(key, ctrl),
        AppMode::Command => match key.code {
            KeyCode::Enter => AppEvent::SubmitCommand,
            KeyCode::Esc => AppEvent::CancelCommand,
            KeyCode::Backspace => AppEvent::CommandBackspace,
            KeyCode::Char(c) if !ctrl => AppEvent::CommandChar(c),
            _ => AppEvent::None,
        },
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('q') => {
                AppEvent::CloseHelp
            }
            _ => AppEvent::None,
        },
        AppMode::Quit => AppEvent::None,
    }
}

fn editing_key(key: KeyEvent, ctrl: bool) -> AppEvent {
    if ctrl {
        return match key.code {
            KeyCode::Char('e') => AppEvent::LoadExample,
            KeyCode::Char('l') => AppEvent::ClearToken,
            KeyCode::Char('v') => AppEvent::LoadClipboard,
            KeyCode::Char('y') => AppEvent::Copy(CopyTarget::Token),
            KeyCode::Char('k') => AppEvent::Copy(CopyTarget::Header),
            KeyCode::Char('p') => AppEvent::Copy(CopyTarget::Payload),
            _ => AppEvent::None,
        };
    }

    // Shift moves the header panel, plain keys the payload
    let panel = if key.modifiers.contains(KeyModifiers::SHIFT) {
        Panel::Header
    } else {
        Panel::Payload
    };

    match key.code {
        KeyCode::Up => AppEvent::ScrollUp(panel, 1),
        KeyCode::Down => AppEvent::ScrollDown(panel, 1),
        KeyCode::PageUp => AppEvent::ScrollUp(panel, PAGE),
        KeyCode::PageDown => AppEvent::ScrollDown(panel, PAGE),
        KeyCode::Esc => AppEvent::EnterCommand,
        KeyCode::Tab => AppEvent::ToggleTab,
        KeyCode::F(1) => AppEvent::Help,
        KeyCode::Backspace => AppEvent::DeleteChar,
        KeyCode::Char(c) => AppEvent::InsertChar(c),
        _ => AppEvent::None,
    }
}
