//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.state.theme.palette();
    let background = Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    frame.render_widget(background, frame.area());

    let (header_area, main_area) = layout::create_layout(frame.area());
    layout::draw_header(frame, header_area, app);
    forms::draw_contact_form(frame, main_area, app);
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything else
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, &palette);
    }
}
