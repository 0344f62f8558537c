// Title and status bar rendering

use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::ui::Styles;

/// Render the application title row
pub fn render_title_bar(f: &mut Frame, title: &str, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let paragraph = Paragraph::new(title.to_string())
        .style(Styles::title_bar())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render the key-hint status bar at the bottom
pub fn render_status_bar(f: &mut Frame, text: &str, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let paragraph = Paragraph::new(text.to_string()).style(Styles::status_bar());
    f.render_widget(paragraph, area);
}
