use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use serde_json::Value;

use crate::app::{AppMode, CopyTarget, Panel, RenderState, StatusLevel};
use crate::config::ViewTab;
use crate::token::{
    claim_rows, format_json, signature_algorithm, ClaimRow, ClaimValue, DecodedToken,
    ParseError, ParseResult,
};
use crate::ui::theme::colors;

const HELP_LINES: &[(&str, &str)] = &[
    ("type / paste", "edit the token"),
    ("Backspace", "delete last character"),
    ("Tab", "toggle JSON / table view"),
    ("Up / Down / PgUp / PgDn", "scroll payload"),
    ("Shift+Up / Shift+Down", "scroll header"),
    ("Ctrl+E", "load example token"),
    ("Ctrl+L", "clear token"),
    ("Ctrl+V", "load token from clipboard"),
    ("Ctrl+Y / K / P", "copy token / header / payload"),
    ("Esc", "open command deck"),
    (":copy [token|header|payload]", "copy to clipboard"),
    (":json  :table", "switch decoded view"),
    (":example  :clear", "example / clear"),
    ("@path  @@", "load from file / clipboard"),
    (":q  Ctrl+C", "quit"),
];

/// Draw one full frame.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(area);

    frame.render_widget(render_title(), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    render_encoded_panel(frame, columns[0], state);
    render_decoded_panel(frame, columns[1], state);
    render_command_deck(frame, rows[2], state);

    if state.mode == AppMode::Help {
        render_help(frame, area);
    }
}

pub fn render_title() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " jwtview ",
            Style::default()
                .fg(colors::header())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "decoded locally, nothing leaves this machine, signatures are not verified",
            Style::default().fg(colors::dimmed()),
        ),
    ])
}

fn render_encoded_panel(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = panel_block(Line::from(" Encoded "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(inner);

    frame.render_widget(render_status_badge(state.result), parts[0]);
    frame.render_widget(render_token(state.token, state.result), parts[1]);
    frame.render_widget(render_error(state.error()), parts[2]);
}

/// `✓ Valid JWT` / `✗ Invalid JWT`, blank while nothing is entered.
pub fn render_status_badge(result: Option<&ParseResult>) -> Line<'static> {
    match result {
        Some(Ok(_)) => Line::from(Span::styled(
            "✓ Valid JWT",
            Style::default()
                .fg(colors::valid())
                .add_modifier(Modifier::BOLD),
        )),
        Some(Err(_)) => Line::from(Span::styled(
            "✗ Invalid JWT",
            Style::default()
                .fg(colors::invalid())
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::default(),
    }
}

/// The token text, with each segment in its own colour once it decodes.
pub fn render_token(token: &str, result: Option<&ParseResult>) -> Paragraph<'static> {
    let text = if token.is_empty() {
        Text::from(Span::styled(
            "Paste a JWT here, or press Esc and type :example",
            Style::default().fg(colors::dimmed()),
        ))
    } else if let Some(Ok(decoded)) = result {
        let dot = Span::styled(".", Style::default().fg(colors::text()));
        Text::from(Line::from(vec![
            Span::styled(
                decoded.raw.header.clone(),
                Style::default().fg(colors::header()),
            ),
            dot.clone(),
            Span::styled(
                decoded.raw.payload.clone(),
                Style::default().fg(colors::payload()),
            ),
            dot,
            Span::styled(
                decoded.raw.signature.clone(),
                Style::default().fg(colors::signature()),
            ),
        ]))
    } else {
        Text::styled(token.to_string(), Style::default().fg(colors::text()))
    };

    Paragraph::new(text).wrap(Wrap { trim: false })
}

pub fn render_error(error: Option<ParseError>) -> Paragraph<'static> {
    let line = match error {
        Some(error) => Line::from(Span::styled(
            format!("⚠ {error}"),
            Style::default().fg(colors::invalid()),
        )),
        None => Line::default(),
    };
    Paragraph::new(line).wrap(Wrap { trim: true })
}

fn render_decoded_panel(frame: &mut Frame, area: Rect, state: &RenderState) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    let decoded = state.decoded();

    let sections = [
        (Panel::Header, CopyTarget::Header, decoded.map(|d| &d.header), colors::header()),
        (Panel::Payload, CopyTarget::Payload, decoded.map(|d| &d.payload), colors::payload()),
    ];

    for ((panel, target, value, color), area) in sections.into_iter().zip(parts.iter()) {
        let label = match panel {
            Panel::Header => "Header",
            Panel::Payload => "Payload",
        };
        let title = decoded_title(label, state.tab, state.is_copied(target));
        let block = panel_block(title);
        let inner_height = block.inner(*area).height;
        let offset = state.scroll.get(panel);

        match value {
            Some(value) if state.tab == ViewTab::Table => {
                let rows = claim_rows(value);
                // one line goes to the column headings
                let offset = clamp_offset(offset, rows.len(), inner_height.saturating_sub(1));
                let mut table_state = TableState::default().with_offset(usize::from(offset));
                frame.render_stateful_widget(
                    render_claims_table(rows).block(block),
                    *area,
                    &mut table_state,
                );
            }
            Some(value) => {
                frame.render_widget(
                    render_json(value, state.json_indent, color, offset, inner_height)
                        .block(block),
                    *area,
                );
            }
            None => {
                let placeholder = format!("// {label} will appear here");
                frame.render_widget(render_placeholder(&placeholder).block(block), *area);
            }
        }
    }

    let signature_block = panel_block(Line::from(" Signature "));
    frame.render_widget(render_signature(decoded).block(signature_block), parts[2]);
}

/// Section title, e.g. ` Decoded Header [JSON] copied! `.
pub fn decoded_title(label: &str, tab: ViewTab, copied: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" Decoded {label} "),
            Style::default()
                .fg(colors::text())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}] ", tab.label()),
            Style::default().fg(colors::dimmed()),
        ),
    ];
    if copied {
        spans.push(Span::styled(
            "copied! ",
            Style::default().fg(colors::valid()),
        ));
    }
    Line::from(spans)
}

/// Largest offset that still fills `visible` lines, capped at `offset`.
fn clamp_offset(offset: u16, content_len: usize, visible: u16) -> u16 {
    let max = content_len.saturating_sub(usize::from(visible));
    offset.min(u16::try_from(max).unwrap_or(u16::MAX))
}

/// Pretty JSON scrolled down by `offset` lines within `height` visible lines.
pub fn render_json(
    value: &Value,
    indent: usize,
    color: ratatui::style::Color,
    offset: u16,
    height: u16,
) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = format_json(value, indent)
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    let offset = clamp_offset(offset, lines.len(), height);

    Paragraph::new(lines)
        .style(Style::default().fg(color))
        .scroll((offset, 0))
}

pub fn render_claims_table(rows: Vec<ClaimRow>) -> Table<'static> {
    let rows: Vec<Row<'static>> = rows
        .into_iter()
        .map(|row| {
            let value_style = match &row.value {
                ClaimValue::Expiry { expired: true, .. } => Style::default().fg(colors::invalid()),
                ClaimValue::Expiry { expired: false, .. } => Style::default().fg(colors::valid()),
                ClaimValue::Timestamp(_) => Style::default().fg(colors::signature()),
                ClaimValue::Text(_) => Style::default().fg(colors::text()),
            };
            Row::new(vec![
                Cell::from(row.key).style(Style::default().fg(colors::payload())),
                Cell::from(row.description).style(Style::default().fg(colors::dimmed())),
                Cell::from(row.value.to_string()).style(value_style),
            ])
        })
        .collect();

    let header = Row::new(vec!["Claim", "Description", "Value"]).style(
        Style::default()
            .fg(colors::text())
            .add_modifier(Modifier::BOLD),
    );

    Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Min(10),
        ],
    )
    .header(header)
}

pub fn render_signature(decoded: Option<&DecodedToken>) -> Paragraph<'static> {
    let Some(decoded) = decoded else {
        return render_placeholder("// Signature info will appear here");
    };

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Algorithm: ", Style::default().fg(colors::dimmed())),
            Span::styled(
                signature_algorithm(&decoded.header),
                Style::default()
                    .fg(colors::signature())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "⚠ Verifying the signature needs the key; this view only decodes",
            Style::default().fg(colors::dimmed()),
        )),
    ])
    .wrap(Wrap { trim: true })
}

pub fn render_placeholder(text: &str) -> Paragraph<'static> {
    Paragraph::new(text.to_string()).style(Style::default().fg(colors::dimmed()))
}

fn panel_block(title: Line<'static>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::dimmed()))
        .title(title)
}

pub fn render_command_deck(frame: &mut Frame, area: Rect, state: &RenderState) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar = Paragraph::new("▌")
        .style(Style::default().fg(colors::header()).bg(colors::surface()));
    frame.render_widget(accent_bar, layout[0]);

    let mode_indicator = match state.mode {
        AppMode::Editing => " EDIT ",
        AppMode::Command => " COMMAND ",
        AppMode::Help => " HELP ",
        AppMode::Quit => " QUIT ",
    };

    let mut spans = vec![Span::styled(
        mode_indicator,
        Style::default()
            .fg(colors::background())
            .bg(colors::text())
            .add_modifier(Modifier::BOLD),
    )];

    if state.mode == AppMode::Command {
        spans.push(Span::styled(
            format!(" {}▏", state.command_input),
            Style::default().fg(colors::text()),
        ));
    } else if let Some(status) = state.status {
        let color = match status.level {
            StatusLevel::Info => colors::valid(),
            StatusLevel::Warning => colors::invalid(),
        };
        spans.push(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color),
        ));
    } else {
        spans.push(Span::styled(
            " Esc for commands · Tab switch view · F1 help · Ctrl+C quit",
            Style::default().fg(colors::dimmed()),
        ));
    }

    let input_widget = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()));

    frame.render_widget(input_widget, layout[1]);
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let width = area.width.min(64);
    let height = area.height.min(HELP_LINES.len() as u16 + 2);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines: Vec<Line<'static>> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<30}"),
                    Style::default().fg(colors::signature()),
                ),
                Span::styled(*action, Style::default().fg(colors::text())),
            ])
        })
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel_block(Line::from(" Help (Esc to close) ")))
            .style(Style::default().bg(colors::surface())),
        popup,
    );
}
