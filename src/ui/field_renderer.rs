//! Field rendering for the contact form

use crate::app::App;
use crate::state::FieldId;
use crate::validation::Severity;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one input box for a field, with border color reflecting focus and
/// error state
pub fn draw_field(frame: &mut Frame, area: Rect, app: &App, id: FieldId) {
    let is_active = app.form.active_field() == Some(id);
    let is_flagged = app.screen.is_flagged(id);

    let border_style = if is_flagged {
        Style::default().fg(app.config.alert())
    } else if is_active {
        Style::default().fg(app.config.accent())
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = app.form.field(id).value();
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(app.config.accent());

    let content = if id == FieldId::Message {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            } else {
                lines.push(Line::from(Span::styled(cursor, cursor_style)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", id.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the feedback line under a field: error text or counter hint
pub fn draw_feedback_line(frame: &mut Frame, area: Rect, app: &App, id: FieldId) {
    let Some(feedback) = app.screen.feedback(id) else {
        return;
    };
    let color = match feedback.severity {
        Severity::Warning => app.config.warning(),
        Severity::Alert => app.config.alert(),
    };
    let line = Line::from(Span::styled(
        feedback.text.clone(),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
