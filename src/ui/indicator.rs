// Triangle Indicator
// Geometry and scroll tracking for the pointer that follows page swipes

use ratatui::style::Color;

use crate::constants::{AUTO_SCROLL_LEAD, TRIANGLE_WIDTH_RATIO};

/// Triangle measurements in terminal columns.
/// Rebuilt on every width change; `offset_x` mutates on every swipe frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorGeometry {
    /// Width of the triangle base
    pub base_width: u16,

    /// Height of the triangle (half of the base)
    pub height: u16,

    /// Offset that centers the triangle under the first tab cell
    pub init_offset_x: u16,

    /// Current horizontal translation driven by swipe progress
    pub offset_x: u16,
}

/// Output of one swipe frame: the new translation plus an optional
/// container scroll update once the active tab nears the visible edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollFrame {
    pub offset_x: u16,
    pub scroll_x: Option<u16>,
}

/// Draws a triangular pointer beneath the tab strip and tracks swipe
/// progress. Owns its geometry exclusively; all mutation happens through
/// synchronous `resize` and `scroll` calls on the draw thread.
pub struct TriangleIndicator {
    visible_count: u16,
    width: u16,
    geometry: IndicatorGeometry,
    fill: Color,
}

impl TriangleIndicator {
    /// Create an indicator for the given visible tab count.
    /// The config resolve step guarantees a count >= 1; the guard here
    /// keeps every cell-width division total regardless.
    pub fn new(visible_count: u16, fill: Color) -> Self {
        Self {
            visible_count: visible_count.max(1),
            width: 0,
            geometry: IndicatorGeometry::default(),
            fill,
        }
    }

    /// Recompute triangle geometry for a new container width.
    /// A zero width degrades to zero-size geometry rather than failing.
    pub fn resize(&mut self, width: u16) {
        self.width = width;
        let tab_width = width / self.visible_count;
        let base_width = (tab_width as f32 * TRIANGLE_WIDTH_RATIO) as u16;

        self.geometry = IndicatorGeometry {
            base_width,
            height: base_width / 2,
            init_offset_x: tab_width / 2 - base_width / 2,
            offset_x: self.geometry.offset_x,
        };
    }

    /// Track one swipe frame: linear translation across the full scroll
    /// range, plus the container scroll update once the selected tab is
    /// within `AUTO_SCROLL_LEAD` tabs of the visible edge.
    pub fn scroll(&mut self, page: usize, offset: f32, child_count: usize) -> ScrollFrame {
        let tab_width = self.width / self.visible_count;
        let offset_x = (tab_width as f32 * (offset + page as f32)) as u16;
        self.geometry.offset_x = offset_x;

        // Edge tab index where the strip starts shifting. Signed: for
        // visible counts below the lead this goes negative and the strip
        // scrolls from the very first swipe.
        let lead_edge = self.visible_count as i32 - AUTO_SCROLL_LEAD;

        let scroll_x = if page as i32 >= lead_edge
            && offset > 0.0
            && child_count > self.visible_count as usize
        {
            let base = if self.visible_count != 1 {
                (page as i32 - lead_edge) as i64 * tab_width as i64
            } else {
                page as i64 * tab_width as i64
            };
            let shifted = base + (tab_width as f32 * offset) as i64;
            Some(shifted.clamp(0, u16::MAX as i64) as u16)
        } else {
            None
        };

        ScrollFrame { offset_x, scroll_x }
    }

    /// Triangle path vertices at the local origin: flat base on the
    /// baseline, apex pointing up.
    pub fn triangle_path(&self) -> [(i32, i32); 3] {
        let base = self.geometry.base_width as i32;
        let height = self.geometry.height as i32;
        [(0, 0), (base, 0), (base / 2, -height)]
    }

    /// Glyph row for the triangle base. The cap glyphs stand in for the
    /// original's rounded corners.
    pub fn base_row(&self) -> String {
        match self.geometry.base_width {
            0 => String::new(),
            1 => "▲".to_string(),
            n => format!("◢{}◣", "█".repeat(n as usize - 2)),
        }
    }

    pub fn geometry(&self) -> IndicatorGeometry {
        self.geometry
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn visible_count(&self) -> u16 {
        self.visible_count
    }

    pub fn tab_width(&self) -> u16 {
        self.width / self.visible_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(width: u16, count: u16) -> TriangleIndicator {
        let mut indicator = TriangleIndicator::new(count, Color::White);
        indicator.resize(width);
        indicator
    }

    #[test]
    fn test_geometry_for_default_layout() {
        let indicator = indicator(500, 5);
        let g = indicator.geometry();
        assert_eq!(g.base_width, 16); // floor(500 / 5 / 6)
        assert_eq!(g.height, 8);
        assert_eq!(g.init_offset_x, 42); // 100 / 2 - 16 / 2
        assert_eq!(indicator.tab_width(), 100);
    }

    #[test]
    fn test_geometry_proportions_hold_across_widths() {
        for width in [0u16, 7, 80, 120, 237, 500, 1000] {
            for count in [1u16, 2, 3, 5, 9] {
                let g = indicator(width, count).geometry();
                assert_eq!(g.base_width, width / count / 6);
                assert_eq!(g.height, g.base_width / 2);
                assert_eq!(g.init_offset_x, width / count / 2 - g.base_width / 2);
            }
        }
    }

    #[test]
    fn test_triangle_path_points_up_from_flat_base() {
        let indicator = indicator(500, 5);
        assert_eq!(indicator.triangle_path(), [(0, 0), (16, 0), (8, -8)]);
    }

    #[test]
    fn test_scroll_translation_before_edge() {
        let mut indicator = indicator(500, 5);
        let frame = indicator.scroll(0, 0.5, 9);
        assert_eq!(frame.offset_x, 50);
        // Page 0 is below the edge index 2, no container scroll
        assert_eq!(frame.scroll_x, None);
    }

    #[test]
    fn test_scroll_shifts_container_past_edge() {
        let mut indicator = indicator(500, 5);
        let frame = indicator.scroll(3, 0.5, 9);
        assert_eq!(frame.offset_x, 350);
        assert_eq!(frame.scroll_x, Some(150)); // (3 - 2) * 100 + 50
    }

    #[test]
    fn test_no_scroll_when_all_children_visible() {
        let mut indicator = indicator(500, 5);
        let frame = indicator.scroll(3, 0.5, 5);
        assert_eq!(frame.scroll_x, None);
    }

    #[test]
    fn test_no_scroll_on_settled_frame() {
        let mut indicator = indicator(500, 5);
        let frame = indicator.scroll(4, 0.0, 9);
        assert_eq!(frame.scroll_x, None);
    }

    #[test]
    fn test_single_visible_tab_uses_full_offset() {
        let mut indicator = indicator(100, 1);
        let frame = indicator.scroll(1, 0.25, 3);
        assert_eq!(frame.scroll_x, Some(125)); // 1 * 100 + 25
    }

    #[test]
    fn test_auto_scroll_small_visible_counts() {
        // Counts 2-4 keep the original formula verbatim; these pin the
        // resulting values rather than redesign them.
        let mut two = indicator(200, 2);
        assert_eq!(two.scroll(0, 0.5, 5).scroll_x, Some(150)); // (0 - (-1)) * 100 + 50

        let mut three = indicator(300, 3);
        assert_eq!(three.scroll(0, 0.5, 6).scroll_x, Some(50)); // (0 - 0) * 100 + 50

        let mut four = indicator(400, 4);
        assert_eq!(four.scroll(1, 0.5, 6).scroll_x, Some(50)); // (1 - 1) * 100 + 50
    }

    #[test]
    fn test_offset_monotonic_in_swipe_progress() {
        let mut indicator = indicator(500, 5);
        let mut last = 0;
        for step in 0..40 {
            let page = step / 10;
            let offset = (step % 10) as f32 / 10.0;
            let frame = indicator.scroll(page, offset, 9);
            assert!(frame.offset_x >= last);
            last = frame.offset_x;
        }
    }

    #[test]
    fn test_scroll_is_idempotent() {
        let mut indicator = indicator(500, 5);
        let first = indicator.scroll(3, 0.5, 9);
        let second = indicator.scroll(3, 0.5, 9);
        assert_eq!(first, second);
        assert_eq!(indicator.geometry().offset_x, 350);
    }

    #[test]
    fn test_zero_width_degrades_silently() {
        let mut indicator = indicator(0, 5);
        assert_eq!(indicator.geometry(), IndicatorGeometry::default());
        let frame = indicator.scroll(3, 0.5, 9);
        assert_eq!(frame.offset_x, 0);
        assert_eq!(frame.scroll_x, Some(0));
        assert_eq!(indicator.base_row(), "");
    }

    #[test]
    fn test_resize_keeps_current_translation() {
        let mut indicator = indicator(500, 5);
        indicator.scroll(2, 0.0, 9);
        indicator.resize(600);
        assert_eq!(indicator.geometry().offset_x, 200);
        assert_eq!(indicator.geometry().base_width, 20);
    }

    #[test]
    fn test_base_row_glyphs() {
        let mut indicator = TriangleIndicator::new(5, Color::White);
        indicator.resize(500);
        assert_eq!(indicator.base_row().chars().count(), 16);
        assert!(indicator.base_row().starts_with('◢'));
        assert!(indicator.base_row().ends_with('◣'));

        indicator.resize(30); // one-column base
        assert_eq!(indicator.base_row(), "▲");
    }
}
