//! Contact form rendering

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Draw the six fields and the submit button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name | Email
            Constraint::Length(3),             // Phone | Department
            Constraint::Length(3),             // Subject
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .horizontal_margin(1)
        .split(area);

    let halves = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let top = halves(rows[0]);
    let middle = halves(rows[1]);

    let slots = [
        (FieldName::Name, top[0]),
        (FieldName::Email, top[1]),
        (FieldName::Phone, middle[0]),
        (FieldName::Department, middle[1]),
        (FieldName::Subject, rows[2]),
        (FieldName::Message, rows[3]),
    ];

    let form = &app.state.form;
    let t = app.translations();
    let palette = app.state.theme.palette();

    for (name, slot) in slots {
        let view = FieldView {
            field: form.field(name),
            is_active: form.active_field_name() == Some(name),
            error: app.controller.field_error(name),
        };
        draw_field(frame, slot, view, t, &palette);
    }

    let sending = app.is_sending();
    let label = if sending { t.sending } else { t.submit };
    let button_area = Rect {
        width: rows[4].width.min(24),
        ..rows[4]
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_submit_active(),
        !sending,
        &palette,
    );
}
