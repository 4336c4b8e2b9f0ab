//! Button component for TUI

use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    palette: &Palette,
) {
    let border_style = if is_selected && is_enabled {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let text_style = if !is_enabled {
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC)
    } else if is_selected {
        Style::default()
            .fg(palette.background)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
