//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{LANGUAGE_SHORTCUT, SUBMIT_SHORTCUT, THEME_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and form, reserving the bottom line for
/// the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the title and subtitle
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.theme.palette();
    let t = app.translations();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                " SIRIUS ",
                Style::default()
                    .fg(palette.background)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                t.contact_title,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            t.form_title,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(t.form_subtitle, Style::default().fg(palette.muted))),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.state.theme.palette();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = format!(
        " Tab:next  {SUBMIT_SHORTCUT}:send  {THEME_SHORTCUT}:theme  {LANGUAGE_SHORTCUT}:lang  Esc:quit"
    );
    let mut spans = vec![Span::styled(hints, Style::default().fg(palette.muted))];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);

    // Theme and language on the right
    let indicator = format!(
        " {} | {} ",
        app.state.theme.label(),
        app.state.language.code()
    );
    let width = indicator.len() as u16;
    let indicator_area = Rect {
        x: area.width.saturating_sub(width),
        y: area.height.saturating_sub(1),
        width: width.min(area.width),
        height: 1,
    };
    let widget = Paragraph::new(indicator).style(Style::default().fg(palette.accent));
    frame.render_widget(widget, indicator_area);
}
