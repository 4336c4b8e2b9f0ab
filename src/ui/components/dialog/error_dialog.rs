//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::theme::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, palette: &Palette) {
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: palette.error,
            background: palette.background,
            message: error_message,
            hint,
            max_width: 60,
        },
    );
}
