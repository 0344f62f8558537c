// Tab Strip
// Equal-width tab cell container with horizontal scrolling and click bounds

use ratatui::{
    layout::Rect,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use super::styles::Styles;

/// Bounding box for a tab cell (for click detection)
#[derive(Debug, Clone, Copy)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Container holding a fixed number of visible tab cells side by side.
/// Every cell is forced to `width / visible_count` columns in insertion
/// order; declared title lengths never influence cell width. The strip
/// stores the horizontal scroll offset the indicator pushes into it.
pub struct TabStrip {
    titles: Vec<String>,
    visible_count: u16,
    width: u16,
    scroll_x: u16,
}

impl TabStrip {
    pub fn new(titles: Vec<String>, visible_count: u16) -> Self {
        Self {
            titles,
            visible_count: visible_count.max(1),
            width: 0,
            scroll_x: 0,
        }
    }

    /// Relayout for a new container width. With zero children or zero
    /// width this is a no-op on everything but the stored width.
    pub fn layout(&mut self, width: u16) {
        self.width = width;
    }

    /// Equal cell width derived from the container, never from titles
    pub fn tab_width(&self) -> u16 {
        self.width / self.visible_count
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn child_count(&self) -> usize {
        self.titles.len()
    }

    pub fn visible_count(&self) -> u16 {
        self.visible_count
    }

    pub fn scroll_x(&self) -> u16 {
        self.scroll_x
    }

    /// Horizontal scroll update pushed in by the indicator
    pub fn set_scroll_x(&mut self, scroll_x: u16) {
        self.scroll_x = scroll_x;
    }

    /// Calculate the screen bounds of each tab cell within `area`,
    /// clipped against the visible window. Off-screen cells keep their
    /// slot with a zero width so indices stay stable.
    pub fn cell_bounds(&self, area: Rect) -> Vec<TabBounds> {
        let tab_width = self.tab_width();
        if tab_width == 0 {
            return Vec::new();
        }

        self.titles
            .iter()
            .enumerate()
            .map(|(idx, _)| {
                let cell_start = idx as i64 * tab_width as i64 - self.scroll_x as i64;
                let cell_end = cell_start + tab_width as i64;
                let visible_start = cell_start.clamp(0, area.width as i64);
                let visible_end = cell_end.clamp(0, area.width as i64);

                TabBounds {
                    x: area.x + visible_start as u16,
                    y: area.y,
                    width: (visible_end - visible_start) as u16,
                    height: 1,
                }
            })
            .collect()
    }

    /// Get the index of the tab at the given coordinates (for click
    /// handling). Returns None if no tab was clicked.
    pub fn tab_at(&self, x: u16, y: u16, area: Rect) -> Option<usize> {
        self.cell_bounds(area)
            .iter()
            .enumerate()
            .find(|(_, b)| b.contains(x, y))
            .map(|(idx, _)| idx)
    }

    /// Build the strip's text row: every title centered in its cell, the
    /// whole row shifted left by the scroll offset and clipped to the
    /// visible window.
    pub fn build_row(&self, active: usize) -> Line<'static> {
        let tab_width = self.tab_width();
        if tab_width == 0 || self.titles.is_empty() {
            return Line::default();
        }

        let window_start = self.scroll_x as u32;
        let window_end = window_start + self.width as u32;
        let mut spans = Vec::new();

        for (idx, title) in self.titles.iter().enumerate() {
            let cell_start = idx as u32 * tab_width as u32;
            let cell_end = cell_start + tab_width as u32;
            if cell_end <= window_start {
                continue;
            }
            if cell_start >= window_end {
                break;
            }

            let cell = center_text(title, tab_width as usize);
            let skip = window_start.saturating_sub(cell_start) as usize;
            let take = (cell_end.min(window_end) - cell_start.max(window_start)) as usize;
            let text = clip_columns(&cell, skip, take);

            let style = if idx == active {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            spans.push(Span::styled(text, style));
        }

        Line::from(spans)
    }
}

/// Center text within a cell, truncating titles wider than the cell.
/// Measured in display columns so double-width glyphs stay in their cell.
fn center_text(text: &str, width: usize) -> String {
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        truncated.push(ch);
        used += w;
    }
    let pad = width - used;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), truncated, " ".repeat(pad - left))
}

/// Cut a column window out of a cell string. A double-width glyph
/// straddling a window edge is replaced by spaces so the columns to its
/// right keep their alignment.
fn clip_columns(text: &str, skip: usize, take: usize) -> String {
    let end = skip + take;
    let mut out = String::new();
    let mut col = 0;
    for ch in text.chars() {
        let start = col;
        col += ch.width().unwrap_or(0);
        if col <= skip {
            continue;
        }
        if start >= end {
            break;
        }
        if start < skip || col > end {
            out.push_str(&" ".repeat(col.min(end) - start.max(skip)));
        } else {
            out.push(ch);
        }
    }
    out
}
