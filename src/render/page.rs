// Page content rendering
// Centered title pages that slide with the swipe offset

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::paging::{Page, Pager};
use crate::ui::Styles;

/// Render the page area. Mid-swipe the current page slides out to the
/// left while the next page enters from the right, split at the column
/// matching the fractional offset.
pub fn render_page(f: &mut Frame, pager: &Pager, area: Rect) {
    if area.width == 0 || area.height == 0 || pager.is_empty() {
        return;
    }

    let progress = pager.progress();
    let shift = (area.width as f32 * progress.offset) as u16;

    let current_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width - shift,
        height: area.height,
    };
    if let Some(page) = pager.current_page() {
        render_page_view(f, page, current_area);
    }

    if shift > 0 {
        let next_area = Rect {
            x: area.x + area.width - shift,
            y: area.y,
            width: shift,
            height: area.height,
        };
        if let Some(page) = pager.next_page() {
            render_page_view(f, page, next_area);
        }
    }
}

/// Render one page: bordered box with the title centered both ways,
/// body text underneath
fn render_page_view(f: &mut Frame, page: &Page, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut lines = Vec::new();
    let content_height = 1 + page.body.is_some() as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let top_pad = inner_height.saturating_sub(content_height) / 2;

    for _ in 0..top_pad {
        lines.push(Line::default());
    }
    lines.push(Line::styled(page.title.clone(), Styles::page_title()));
    if let Some(body) = &page.body {
        lines.push(Line::styled(body.clone(), Styles::page_body()));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::page_border()),
        );
    f.render_widget(paragraph, area);
}
