//! UI module for rendering the TUI

mod dialog;
mod field_renderer;
mod form;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    form::draw(frame, app);

    // The attachment notice overlays everything
    if let Some(text) = app.screen.notice() {
        dialog::render_notice_dialog(frame, text);
    }
}
