//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::focus::{
    format_clock, format_hours_minutes, progress_bar, Phase, SessionClock, TOTAL_SESSIONS,
};
use crate::tui::app::App;
use crate::tui::art::Art;
use crate::tui::theme::style;

const BOX_WIDTH: u16 = 40;
const BOX_HEIGHT: u16 = 12;
const ART_WIDTH: u16 = 15;
const GAP: u16 = 4;
/// Column of the info values, relative to the inner edge of the box.
const LABEL_WIDTH: usize = 12;

/// Key hints for the bottom bar: key, text, role.
const CONTROLS: [(&str, &str, &str); 5] = [
    ("p", "pause/resume", "work"),
    ("s", "skip", "warning"),
    ("a", "art", "info"),
    ("h", "help", "normal"),
    ("q", "uit", "urgent"),
];

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App, title: &str) {
    let area = frame.area();

    let total_width = ART_WIDTH + GAP + BOX_WIDTH;
    let start_x = area.x + area.width.saturating_sub(total_width) / 2;
    let start_y = area.y + area.height.saturating_sub(BOX_HEIGHT) / 2;

    render_art(frame, app.art(), clip(area, start_x, start_y + 2, ART_WIDTH, BOX_HEIGHT));

    let info_x = start_x + ART_WIDTH + GAP;
    render_info(
        frame,
        &app.clock,
        title,
        clip(area, info_x, start_y, BOX_WIDTH, BOX_HEIGHT),
    );

    let bottom_y = start_y + BOX_HEIGHT + 2;
    render_controls(frame, clip(area, area.x, bottom_y, area.width, 2));

    if app.show_help {
        render_help(frame, area);
    }
}

/// Rect at the given position, cut down to what fits inside `area`.
fn clip(area: Rect, x: u16, y: u16, width: u16, height: u16) -> Rect {
    area.intersection(Rect::new(x, y, width, height))
}

/// Render the art picture with its colour overlays.
fn render_art(frame: &mut Frame<'_>, art: &Art, area: Rect) {
    let lines: Vec<Line<'_>> = (0..art.lines.len())
        .map(|row| {
            let spans: Vec<Span<'_>> = art
                .segments(row)
                .into_iter()
                .map(|(text, color)| Span::styled(text, style(color.unwrap_or("white"))))
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Role used for the countdown value.
#[must_use]
pub fn status_role(clock: &SessionClock) -> &'static str {
    if clock.is_paused() {
        return "warning";
    }
    match clock.phase() {
        Phase::Break => "break",
        Phase::Work if clock.remaining_seconds() < 60 => "urgent",
        Phase::Work if clock.remaining_seconds() < 5 * 60 => "warning",
        Phase::Work => "work",
    }
}

fn info_row(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<width$}", format!("{label}:"), width = LABEL_WIDTH),
            style("bold"),
        ),
        Span::styled(value, value_style),
    ])
}

/// Render the boxed info panel.
fn render_info(frame: &mut Frame<'_>, clock: &SessionClock, title: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style("header"))
        .title(Line::from(Span::styled(format!(" {title} "), style("title"))));

    let inner = block.inner(area);
    let bar_width = usize::from(inner.width.saturating_sub(2));
    let white = style("white");

    let status = if clock.is_paused() { "PAUSED" } else { "RUNNING" };

    let lines = vec![
        Line::default(),
        info_row("Timer", clock.phase().label().to_string(), white),
        info_row(
            "Time Left",
            format_clock(clock.remaining_seconds()),
            style(status_role(clock)),
        ),
        info_row(
            "Session",
            format!("{}/{TOTAL_SESSIONS}", clock.session_index()),
            white,
        ),
        info_row("Status", status.to_string(), white),
        info_row("Completed", clock.completed_pomodoros().to_string(), white),
        info_row(
            "Work Time",
            format_hours_minutes(clock.total_work_seconds()),
            white,
        ),
        info_row(
            "Break Time",
            format_hours_minutes(clock.total_break_seconds()),
            white,
        ),
        info_row("Progress", String::new(), white),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(progress_bar(clock.progress_fraction(), bar_width), white),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the horizontal rule and key hints.
fn render_controls(frame: &mut Frame<'_>, area: Rect) {
    if area.height == 0 {
        return;
    }

    let rule = "─".repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(rule).style(style("header")),
        Rect { height: 1, ..area },
    );

    let mut spans = Vec::new();
    for (i, (key, text, role)) in CONTROLS.iter().enumerate() {
        spans.push(Span::styled("[", style("header")));
        spans.push(Span::styled(*key, style(role)));
        spans.push(Span::styled("]", style("header")));
        spans.push(Span::styled(*text, style(role)));
        if i + 1 < CONTROLS.len() {
            spans.push(Span::styled(" ", style("header")));
        }
    }

    if area.height > 1 {
        let hints = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            hints,
        );
    }
}

/// Render the key binding overlay.
fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let bindings = [
        ("p", "pause / resume"),
        ("s", "skip interval"),
        ("a", "next art"),
        ("A", "previous art"),
        ("h", "help"),
        ("q", "quit"),
    ];

    let mut lines: Vec<Line<'_>> = bindings
        .iter()
        .map(|(key, text)| {
            Line::from(vec![
                Span::styled(format!("  {key}  "), style("bold")),
                Span::styled(*text, style("white")),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("  any key to close", style("info"))));

    let width = 30;
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = clip(
        area,
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style("header"))
        .title(Line::from(Span::styled(" help ", style("title"))));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
