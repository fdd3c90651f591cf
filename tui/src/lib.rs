//! TUI rendering for FLAMES using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::apply_screen_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{
    Glyphs, Palette, glyphs, gradient_spans, heart_frame, palette, spinner_frame, styles,
};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use flames_engine::{App, NameDraft, NameSlot, ResultCode, ScreenKind, Submission};

const CARD_WIDTH: u16 = 48;
const INPUT_CARD_HEIGHT: u16 = 19;
const CALCULATING_CARD_HEIGHT: u16 = 13;
const RESULT_CARD_HEIGHT: u16 = 17;
const PROGRESS_WIDTH: usize = 24;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let height = match app.screen_kind() {
        ScreenKind::Input => INPUT_CARD_HEIGHT,
        ScreenKind::Calculating => CALCULATING_CARD_HEIGHT,
        ScreenKind::Result => RESULT_CARD_HEIGHT,
    };
    let base = centered_rect(chunks[0], CARD_WIDTH, height);
    let card = match app.screen_effect() {
        Some(effect) => apply_screen_effect(effect, base, chunks[0]),
        None => base,
    };
    frame.render_widget(Clear, card);

    match (app.screen_kind(), app.submission()) {
        (ScreenKind::Calculating, Some(submission)) => {
            draw_calculating(frame, app, submission, card, &palette, &glyphs);
        }
        (ScreenKind::Result, Some(submission)) => {
            draw_result(frame, submission, card, &palette, &glyphs);
        }
        _ => draw_form(frame, app, card, &palette, &glyphs),
    }

    draw_key_hints(frame, app, chunks[1], &palette);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn card_block(palette: &Palette, border: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::new(2, 2, 1, 1))
}

fn centered(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines).alignment(Alignment::Center)
}

// ----------------------------------------------------------------------
// Input screen
// ----------------------------------------------------------------------

fn draw_form(frame: &mut Frame, app: &App, card: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = card_block(palette, Style::default().fg(palette.primary_dim));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heart + title + subtitle
            Constraint::Length(1),
            Constraint::Length(1), // Partner 1 label
            Constraint::Length(3), // Partner 1 field
            Constraint::Length(1), // Partner 2 label
            Constraint::Length(3), // Partner 2 field
            Constraint::Length(1), // Error
            Constraint::Length(1), // Calculate
            Constraint::Min(0),
        ])
        .split(inner);

    let options = app.ui_options();
    let header = centered(vec![
        Line::from(Span::styled(
            heart_frame(app.tick_count(), options),
            Style::default()
                .fg(palette.pink)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "FLAMES",
            Style::default()
                .fg(palette.pink)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Discover your relationship destiny!",
            styles::subtitle(palette),
        )),
    ]);
    frame.render_widget(header, rows[0]);

    for (slot, label_area, field_area) in [
        (NameSlot::First, rows[2], rows[3]),
        (NameSlot::Second, rows[4], rows[5]),
    ] {
        let focused = app.focus() == slot;
        let marker = if focused { glyphs.selected } else { " " };
        let label = Paragraph::new(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.pink)),
            Span::styled(slot.label(), styles::field_label(palette)),
        ]));
        frame.render_widget(label, label_area);
        draw_field(frame, app.draft(slot), slot, focused, field_area, palette);
    }

    if let Some(error) = app.error() {
        let error = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            styles::error(palette),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(error, rows[6]);
    }

    let button = centered(vec![Line::from(Span::styled(
        format!("  Calculate {}  ", glyphs.sparkle),
        styles::button(palette),
    ))]);
    frame.render_widget(button, rows[7]);
}

fn draw_field(
    frame: &mut Frame,
    draft: &NameDraft,
    slot: NameSlot,
    focused: bool,
    area: Rect,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::field_border(palette, focused))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let (scroll, cursor_col) = field_scroll(draft, inner.width);
    let content = if draft.text().is_empty() {
        Line::from(Span::styled(slot.placeholder(), styles::placeholder(palette)))
    } else {
        Line::from(Span::styled(
            display_text(draft.text()),
            Style::default().fg(palette.text_primary),
        ))
    };

    let field = Paragraph::new(content).block(block).scroll((0, scroll));
    frame.render_widget(field, area);

    if focused && inner.width > 0 {
        frame.set_cursor_position((inner.x + cursor_col, inner.y));
    }
}

/// Pasted tabs and other blanks render as plain spaces.
fn display_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

/// Horizontal scroll keeping the cursor inside a field `width` columns wide.
/// Returns `(scroll, cursor column relative to the field)`.
fn field_scroll(draft: &NameDraft, width: u16) -> (u16, u16) {
    let before = display_text(&draft.text()[..draft.byte_index()]);
    let col = u16::try_from(before.width()).unwrap_or(u16::MAX);
    let last = width.saturating_sub(1);
    let scroll = col.saturating_sub(last);
    (scroll, col - scroll)
}

// ----------------------------------------------------------------------
// Calculating screen
// ----------------------------------------------------------------------

fn draw_calculating(
    frame: &mut Frame,
    app: &App,
    submission: &Submission,
    card: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = card_block(palette, Style::default().fg(palette.pink));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let options = app.ui_options();
    let spinner = spinner_frame(app.tick_count(), options);
    let struck = &submission.reading.eliminated[..app.struck_count()];

    let mut letters = Vec::new();
    for (i, code) in ResultCode::ALL.into_iter().enumerate() {
        if i > 0 {
            letters.push(Span::raw("  "));
        }
        let style = if struck.contains(&code) {
            styles::struck(palette)
        } else {
            Style::default()
                .fg(palette.pink)
                .add_modifier(Modifier::BOLD)
        };
        letters.push(Span::styled(code.letter().to_string(), style));
    }

    let progress = app.calculation_progress().unwrap_or(1.0);
    let filled = ((progress * PROGRESS_WIDTH as f32).round() as usize).min(PROGRESS_WIDTH);
    let bar = Line::from(vec![
        Span::styled(
            glyphs.progress_filled.repeat(filled),
            Style::default().fg(palette.pink),
        ),
        Span::styled(
            glyphs.progress_empty.repeat(PROGRESS_WIDTH - filled),
            Style::default().fg(palette.bg_border),
        ),
    ]);

    let lines = vec![
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(palette.primary)),
            Span::raw(" "),
            Span::styled(glyphs.heart, Style::default().fg(palette.pink)),
            Span::raw(" "),
            Span::styled(spinner, Style::default().fg(palette.primary)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Calculating...", styles::title(palette))),
        Line::from(Span::styled("Reading the stars", styles::subtitle(palette))),
        Line::from(""),
        Line::from(letters),
        Line::from(""),
        bar,
    ];
    frame.render_widget(centered(lines), inner);
}

// ----------------------------------------------------------------------
// Result screen
// ----------------------------------------------------------------------

fn draw_result(
    frame: &mut Frame,
    submission: &Submission,
    card: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let details = submission.reading.code.details();
    let accent = palette.accent_color(details.accent);
    let block = card_block(palette, Style::default().fg(accent));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut trail = Vec::new();
    for (i, code) in ResultCode::ALL.into_iter().enumerate() {
        if i > 0 {
            trail.push(Span::raw(" "));
        }
        let style = if code == details.code {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            styles::struck(palette)
        };
        trail.push(Span::styled(code.letter().to_string(), style));
    }

    let survivors = submission.reading.survivors;
    let noun = if survivors == 1 { "letter" } else { "letters" };

    let lines = vec![
        Line::from(Span::styled(
            glyphs.icon(details.icon),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(gradient_spans(
            details.label,
            details.accent,
            palette,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            details.message,
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(display_text(submission.first.as_str()), styles::title(palette)),
            Span::styled(format!(" {} ", glyphs.heart), Style::default().fg(palette.pink)),
            Span::styled(display_text(submission.second.as_str()), styles::title(palette)),
        ]),
        Line::from(""),
        Line::from(trail),
        Line::from(Span::styled(
            format!("{survivors} {noun} left after cancelling"),
            styles::subtitle(palette),
        )),
        Line::from(""),
        Line::from(Span::styled("  Try Again  ", styles::button_outline(palette))),
    ];
    let body = centered(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

// ----------------------------------------------------------------------
// Key hints
// ----------------------------------------------------------------------

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints: &[(&'static str, &'static str)] = match app.screen_kind() {
        ScreenKind::Input => &[
            ("Tab", "switch"),
            ("Enter", "calculate"),
            ("Ctrl+U", "clear"),
            ("Esc", "quit"),
        ],
        ScreenKind::Calculating => &[("Esc", "quit")],
        ScreenKind::Result => &[("Enter", "try again"), ("q", "quit")],
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}{sep}"), styles::key_hint(palette)));
    }
    frame.render_widget(centered(vec![Line::from(spans)]), area);
}
