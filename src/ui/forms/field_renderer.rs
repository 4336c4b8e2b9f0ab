//! Field rendering utilities for forms

use crate::i18n::Translations;
use crate::state::FormField;
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field should be drawn this frame
pub struct FieldView<'a> {
    pub field: &'a FormField,
    pub is_active: bool,
    /// Error to show; only passed for touched fields
    pub error: Option<&'a str>,
}

/// Draw a form field with its localized label, placeholder and error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    view: FieldView<'_>,
    t: &Translations,
    palette: &Palette,
) {
    let FieldView {
        field,
        is_active,
        error,
    } = view;

    let border_color = match (error, is_active) {
        (Some(_), _) => palette.error,
        (None, true) => palette.accent,
        (None, false) => palette.muted,
    };
    let cursor_style = Style::default().fg(palette.accent);

    let value = field.display_value(t);
    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            t.placeholder(field.name),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else if field.is_choice() {
        vec![Line::from(Span::styled(
            value.clone(),
            Style::default().fg(palette.text),
        ))]
    } else {
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(palette.text))))
            .collect()
    };

    if is_active {
        if field.is_choice() {
            if let Some(line) = lines.first_mut() {
                line.spans.insert(0, Span::styled("◀ ", cursor_style));
                line.spans.push(Span::styled(" ▶", cursor_style));
            }
        } else if value.is_empty() {
            if let Some(line) = lines.first_mut() {
                line.spans.insert(0, Span::styled("▌", cursor_style));
            }
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("▌", cursor_style));
        }
    }

    let mut block = Block::default()
        .title(format!(" {} ", t.label(field.name)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(palette.error),
        )));
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content.block(block), area);
}
