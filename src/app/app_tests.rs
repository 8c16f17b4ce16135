use std::time::{Duration, Instant};

use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, CopyTarget, Panel, PanelScroll, StatusLevel};
use crate::config::{DisplayConfig, ViewTab};
use crate::input::MemoryClipboard;
use crate::token::{ParseError, EXAMPLE_TOKEN};

fn app_with(clipboard: MemoryClipboard) -> App {
    App::with_clipboard(DisplayConfig::default(), Box::new(clipboard))
}

fn app() -> App {
    app_with(MemoryClipboard::default())
}

fn type_command(app: &mut App, command: &str) {
    app.handle_event(AppEvent::EnterCommand);
    for c in command.chars() {
        app.handle_event(AppEvent::CommandChar(c));
    }
    app.handle_event(AppEvent::SubmitCommand);
}

#[test]
fn test_app_initial_state() {
    let app = app();
    assert_eq!(app.mode(), AppMode::Editing);
    assert_eq!(app.token(), "");
    assert!(app.result().is_none());
    assert_eq!(app.tab(), ViewTab::Json);
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = app();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_app_help_and_close() {
    let mut app = app();
    app.handle_event(AppEvent::Help);
    assert_eq!(app.mode(), AppMode::Help);
    app.handle_event(AppEvent::CloseHelp);
    assert_eq!(app.mode(), AppMode::Editing);
}

#[test]
fn test_app_reparses_on_every_edit() {
    let mut app = app();
    for c in "a.b".chars() {
        app.handle_event(AppEvent::InsertChar(c));
    }
    assert_eq!(app.result(), Some(&Err(ParseError::MalformedStructure)));

    app.handle_event(AppEvent::DeleteChar);
    app.handle_event(AppEvent::DeleteChar);
    app.handle_event(AppEvent::DeleteChar);
    assert_eq!(app.token(), "");
    assert!(app.result().is_none());
}

#[test]
fn test_app_blank_token_has_no_result() {
    let mut app = app();
    app.handle_event(AppEvent::Paste("   ".to_string()));
    assert!(app.result().is_none());
}

#[test]
fn test_app_delete_removes_whole_grapheme() {
    let mut app = app();
    app.handle_event(AppEvent::Paste("ab\u{e9}".to_string()));
    app.handle_event(AppEvent::Paste("e\u{301}".to_string()));
    app.handle_event(AppEvent::DeleteChar);
    assert_eq!(app.token(), "ab\u{e9}");
}

#[test]
fn test_app_load_example_and_clear() {
    let mut app = app();
    app.handle_event(AppEvent::LoadExample);
    assert_eq!(app.token(), EXAMPLE_TOKEN);
    assert!(matches!(app.result(), Some(Ok(_))));

    app.handle_event(AppEvent::ClearToken);
    assert_eq!(app.token(), "");
    assert!(app.result().is_none());
    assert!(app.status().is_none());
}

#[test]
fn test_app_toggle_tab() {
    let mut app = app();
    app.handle_event(AppEvent::ToggleTab);
    assert_eq!(app.tab(), ViewTab::Table);
    app.handle_event(AppEvent::SetTab(ViewTab::Json));
    assert_eq!(app.tab(), ViewTab::Json);
}

#[test]
fn test_app_copy_header_as_formatted_json() {
    let clipboard = MemoryClipboard::default();
    let mut app = app_with(clipboard.clone());
    app.handle_event(AppEvent::LoadExample);
    app.handle_event(AppEvent::Copy(CopyTarget::Header));

    assert_eq!(
        clipboard.contents().as_deref(),
        Some("{\n  \"alg\": \"HS256\",\n  \"typ\": \"JWT\"\n}")
    );
    assert_eq!(app.copied(), Some(CopyTarget::Header));
}

#[test]
fn test_app_copy_token_is_raw_text() {
    let clipboard = MemoryClipboard::default();
    let mut app = app_with(clipboard.clone());
    app.handle_event(AppEvent::Paste("not.a.jwt".to_string()));
    app.handle_event(AppEvent::Copy(CopyTarget::Token));
    assert_eq!(clipboard.contents().as_deref(), Some("not.a.jwt"));
}

#[test]
fn test_app_copy_payload_requires_valid_token() {
    let clipboard = MemoryClipboard::default();
    let mut app = app_with(clipboard.clone());
    app.handle_event(AppEvent::Paste("x.y".to_string()));
    app.handle_event(AppEvent::Copy(CopyTarget::Payload));

    assert_eq!(clipboard.contents(), None);
    assert_eq!(app.copied(), None);
    assert_eq!(app.status().unwrap().level, StatusLevel::Warning);
}

#[test]
fn test_app_copy_failure_sets_warning() {
    let mut app = app_with(MemoryClipboard::unavailable());
    app.handle_event(AppEvent::LoadExample);
    app.handle_event(AppEvent::Copy(CopyTarget::Token));

    assert_eq!(app.copied(), None);
    let status = app.status().unwrap();
    assert_eq!(status.level, StatusLevel::Warning);
    assert!(status.text.starts_with("Copy failed"));
}

#[test]
fn test_app_copy_feedback_expires() {
    let mut app = app();
    app.handle_event(AppEvent::LoadExample);
    app.handle_event(AppEvent::Copy(CopyTarget::Token));
    assert_eq!(app.copied(), Some(CopyTarget::Token));

    app.tick(Instant::now());
    assert_eq!(app.copied(), Some(CopyTarget::Token));

    app.tick(Instant::now() + Duration::from_secs(3));
    assert_eq!(app.copied(), None);
}

#[test]
fn test_app_load_clipboard() {
    let token = format!("  {EXAMPLE_TOKEN}\n");
    let mut app = app_with(MemoryClipboard::with_text(&token));
    app.handle_event(AppEvent::LoadClipboard);

    assert_eq!(app.token(), EXAMPLE_TOKEN);
    assert!(matches!(app.result(), Some(Ok(_))));
    assert_eq!(app.status().unwrap().level, StatusLevel::Info);
}

#[test]
fn test_app_load_missing_file_sets_warning() {
    let mut app = app();
    app.handle_event(AppEvent::LoadFile("/nonexistent/token.jwt".to_string()));
    assert_eq!(app.token(), "");
    assert_eq!(app.status().unwrap().level, StatusLevel::Warning);
}

#[test]
fn test_app_command_deck_flow() {
    let mut app = app();
    type_command(&mut app, ":example");
    assert_eq!(app.mode(), AppMode::Editing);
    assert_eq!(app.token(), EXAMPLE_TOKEN);

    type_command(&mut app, ":table");
    assert_eq!(app.tab(), ViewTab::Table);

    type_command(&mut app, ":q");
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_app_command_backspace_and_cancel() {
    let mut app = app();
    app.handle_event(AppEvent::EnterCommand);
    app.handle_event(AppEvent::CommandChar(':'));
    app.handle_event(AppEvent::CommandChar('x'));
    app.handle_event(AppEvent::CommandBackspace);
    assert_eq!(app.render_state().command_input, ":");

    app.handle_event(AppEvent::CancelCommand);
    assert_eq!(app.mode(), AppMode::Editing);
    assert_eq!(app.render_state().command_input, "");
}

#[test]
fn test_app_unknown_command_sets_warning() {
    let mut app = app();
    type_command(&mut app, ":frobnicate");
    let status = app.status().unwrap();
    assert_eq!(status.level, StatusLevel::Warning);
    assert!(status.text.contains(":frobnicate"));
}

#[test]
fn test_app_get_render_state_reflects_app() {
    let mut app = app();
    app.handle_event(AppEvent::LoadExample);
    let state = app.render_state();
    assert_eq!(state.mode, AppMode::Editing);
    assert_eq!(state.token, EXAMPLE_TOKEN);
    assert_eq!(state.decoded().unwrap().header["alg"], "HS256");
    assert_eq!(state.error(), None);
    assert_eq!(state.json_indent, 2);
}

#[test]
fn test_app_scroll_clamps_to_content() {
    let mut app = app();
    app.handle_event(AppEvent::LoadExample);

    // five claims plus braces is seven JSON lines
    app.handle_event(AppEvent::ScrollDown(Panel::Payload, 100));
    assert_eq!(app.scroll().payload, 6);
    assert_eq!(app.scroll().header, 0);

    app.handle_event(AppEvent::ScrollUp(Panel::Payload, 1));
    assert_eq!(app.scroll().payload, 5);
    app.handle_event(AppEvent::ScrollUp(Panel::Payload, 100));
    assert_eq!(app.scroll().payload, 0);
}

#[test]
fn test_app_scroll_resets_on_token_and_tab_change() {
    let mut app = app();
    app.handle_event(AppEvent::LoadExample);
    app.handle_event(AppEvent::ScrollDown(Panel::Header, 2));
    assert_eq!(app.scroll().header, 2);

    app.handle_event(AppEvent::ToggleTab);
    assert_eq!(app.scroll(), PanelScroll::default());

    app.handle_event(AppEvent::ScrollDown(Panel::Payload, 1));
    app.handle_event(AppEvent::InsertChar('x'));
    assert_eq!(app.scroll(), PanelScroll::default());
}

#[test]
fn test_app_scroll_without_decoded_token_stays_at_top() {
    let mut app = app();
    app.handle_event(AppEvent::ScrollDown(Panel::Payload, 3));
    assert_eq!(app.scroll().payload, 0);
}
