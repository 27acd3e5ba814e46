//! Contact form layout: fields, buttons row, and success banner

use super::field_renderer::{draw_feedback_line, draw_field};
use crate::app::App;
use crate::state::{FieldId, FormButton};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 64;

/// Draw the whole form centered in the terminal
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let form_area = centered_form_area(area, app.screen.shake_offset());

    let rows = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(3), // first name
        Constraint::Length(1), // feedback
        Constraint::Length(3), // last name
        Constraint::Length(1), // feedback
        Constraint::Length(3), // email
        Constraint::Length(1), // feedback
        Constraint::Length(6), // message
        Constraint::Length(1), // feedback
        Constraint::Length(3), // buttons
        Constraint::Length(3), // banner
        Constraint::Min(0),
    ])
    .split(form_area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Contact Us",
        Style::default()
            .fg(app.config.accent())
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, rows[0]);

    let field_rows = [
        (FieldId::FirstName, rows[1], rows[2]),
        (FieldId::LastName, rows[3], rows[4]),
        (FieldId::Email, rows[5], rows[6]),
        (FieldId::Message, rows[7], rows[8]),
    ];
    for (id, input_area, feedback_area) in field_rows {
        draw_field(frame, input_area, app, id);
        draw_feedback_line(frame, feedback_area, app, id);
    }

    draw_buttons(frame, rows[9], app);

    if app.screen.banner_visible() {
        draw_banner(frame, rows[10]);
    }
}

/// Center the form horizontally, shifted by the shake offset while the
/// rejection animation runs
fn centered_form_area(area: Rect, shake_offset: i16) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let x = (area.width.saturating_sub(width)) / 2;
    let x = (x as i16 + shake_offset).clamp(0, area.width.saturating_sub(width) as i16) as u16;
    Rect {
        x: area.x + x,
        y: area.y + 1,
        width,
        height: area.height.saturating_sub(1),
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Length(20),
        Constraint::Min(0),
    ])
    .split(area);

    let on_buttons = app.form.is_buttons_row_active();
    draw_button(
        frame,
        columns[0],
        "Send",
        on_buttons && app.form.selected_button == FormButton::Send,
        app,
    );
    draw_button(
        frame,
        columns[1],
        "Attach file",
        on_buttons && app.form.selected_button == FormButton::Attach,
        app,
    );
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, selected: bool, app: &App) {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(app.config.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let button = Paragraph::new(Line::from(Span::styled(format!(" {label} "), style)))
        .block(Block::default().borders(Borders::ALL).border_style(
            if selected {
                Style::default().fg(app.config.accent())
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ));
    frame.render_widget(button, area);
}

fn draw_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(Span::styled(
        "Message sent successfully!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(banner, area);
}
