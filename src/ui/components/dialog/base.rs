//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Blank columns between the border and the text, per side
const PADDING: u16 = 2;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    pub background: Color,
    pub message: &'a str,
    /// Key hint shown under the message
    pub hint: Vec<Span<'a>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay, clamped to the frame
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let chrome = 2 * PADDING + 2;
    let text_width = config.max_width.saturating_sub(chrome).max(1) as usize;
    let message = wrap_text(config.message, text_width);

    let hint_width: usize = config.hint.iter().map(Span::width).sum();
    let widest = message
        .iter()
        .map(|line| line.chars().count())
        .chain([config.title.chars().count(), hint_width])
        .max()
        .unwrap_or(0) as u16;

    // title, blank, message, blank, hint
    let rows = message.len() as u16 + 4;
    let dialog_area = centered(area, widest + chrome, rows + 2);

    let mut content = Vec::with_capacity(message.len() + 4);
    content.push(Line::from(Span::styled(
        config.title,
        Style::default()
            .fg(config.accent)
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::default());
    content.extend(message.into_iter().map(Line::from));
    content.push(Line::default());
    content.push(Line::from(config.hint));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent))
        .padding(ratatui::widgets::Padding::horizontal(PADDING));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .style(Style::default().bg(config.background)),
        dialog_area,
    );
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap by character count; `\n` starts a new paragraph
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let len = line.chars().count();
            if len > 0 && len + 1 + word.chars().count() > max_width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}
