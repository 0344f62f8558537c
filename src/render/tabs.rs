// Tab strip and indicator rendering

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{Styles, TabStrip, TriangleIndicator};

/// Render the tab strip row
pub fn render_tab_strip(f: &mut Frame, strip: &TabStrip, active: usize, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let line = strip.build_row(active);
    f.render_widget(Paragraph::new(line), area);
}

/// Render the indicator row directly below the strip. The triangle's
/// left base vertex lands at `init_offset_x + offset_x - scroll_x`,
/// the scroll shift standing in for the original container scroll.
pub fn render_indicator(f: &mut Frame, indicator: &TriangleIndicator, scroll_x: u16, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let geometry = indicator.geometry();
    let column =
        geometry.init_offset_x as i64 + geometry.offset_x as i64 - scroll_x as i64;

    let Some(line) = indicator_line(&indicator.base_row(), column, area.width) else {
        return;
    };

    let styled = Line::from(
        line.into_iter()
            .map(|(text, is_fill)| {
                if is_fill {
                    Span::styled(text, Styles::indicator(indicator.fill()))
                } else {
                    Span::raw(text)
                }
            })
            .collect::<Vec<_>>(),
    );
    f.render_widget(Paragraph::new(styled), area);
}

/// Clip the triangle glyph row against the visible window. Returns the
/// (text, is_fill) segments of the row, or None when the triangle is
/// entirely off screen.
fn indicator_line(glyphs: &str, column: i64, width: u16) -> Option<Vec<(String, bool)>> {
    let glyph_count = glyphs.chars().count() as i64;
    if glyph_count == 0 || column >= width as i64 || column + glyph_count <= 0 {
        return None;
    }

    let skip = (-column).max(0) as usize;
    let pad = column.max(0) as usize;
    let take = (width as i64 - column.max(0)).max(0) as usize;
    let visible: String = glyphs.chars().skip(skip).take(take).collect();

    let mut segments = Vec::new();
    if pad > 0 {
        segments.push((" ".repeat(pad), false));
    }
    segments.push((visible, true));
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_line_positions_triangle() {
        let segments = indicator_line("◢██◣", 3, 20).unwrap();
        assert_eq!(segments[0], ("   ".to_string(), false));
        assert_eq!(segments[1], ("◢██◣".to_string(), true));
    }

    #[test]
    fn test_indicator_line_clips_left_edge() {
        let segments = indicator_line("◢██◣", -2, 20).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0], ("█◣".to_string(), true));
    }

    #[test]
    fn test_indicator_line_clips_right_edge() {
        let segments = indicator_line("◢██◣", 18, 20).unwrap();
        assert_eq!(segments[1], ("◢█".to_string(), true));
    }

    #[test]
    fn test_indicator_line_off_screen() {
        assert!(indicator_line("◢██◣", 25, 20).is_none());
        assert!(indicator_line("◢██◣", -10, 20).is_none());
        assert!(indicator_line("", 0, 20).is_none());
    }
}
