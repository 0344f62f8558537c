// Application State
// Main application state management and lifecycle

use std::time::{Duration, Instant};

use super::AppConfig;
use crate::paging::{Page, PageProgress, Pager, SwipeAnimator};
use crate::ui::{parse_color, TabStrip, TriangleIndicator};

/// Main application state: the pager feeds swipe progress into the
/// indicator, which pushes scroll updates into the strip. The strip and
/// the indicator never talk to each other directly.
pub struct App {
    /// Application configuration
    pub config: AppConfig,

    /// Ordered pages and the current swipe progress
    pub pager: Pager,

    /// Equal-width tab cell container
    pub strip: TabStrip,

    /// Triangular swipe-progress indicator
    pub indicator: TriangleIndicator,

    /// In-flight swipe animation, if any
    animator: Option<SwipeAnimator>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig, pages: Vec<Page>) -> Self {
        let visible_count = config.ui.visible_tab_count;
        let fill = parse_color(&config.ui.indicator_color);
        let pager = Pager::new(pages);

        Self {
            strip: TabStrip::new(pager.titles(), visible_count),
            indicator: TriangleIndicator::new(visible_count, fill),
            pager,
            animator: None,
            should_quit: false,
            config,
        }
    }

    /// Relayout the strip and the indicator for a new container width,
    /// then re-anchor the indicator under the current page
    pub fn on_resize(&mut self, width: u16) {
        self.strip.layout(width);
        self.indicator.resize(width);
        let progress = self.pager.progress();
        self.apply_progress(progress);
    }

    /// Start an animated swipe to the next page
    pub fn swipe_next(&mut self) {
        let current = self.swipe_origin();
        if current + 1 < self.pager.page_count() {
            self.animate_to(current + 1);
        }
    }

    /// Start an animated swipe to the previous page
    pub fn swipe_previous(&mut self) {
        let current = self.swipe_origin();
        if current > 0 {
            self.animate_to(current - 1);
        }
    }

    /// Animate to an arbitrary page (tab click, Home/End)
    pub fn jump_to(&mut self, page: usize) {
        if page < self.pager.page_count() {
            self.animate_to(page);
        }
    }

    pub fn jump_to_last(&mut self) {
        if let Some(last) = self.pager.page_count().checked_sub(1) {
            self.animate_to(last);
        }
    }

    /// Page a new swipe starts from: the target of the in-flight
    /// animation if there is one, otherwise the settled page
    fn swipe_origin(&self) -> usize {
        self.animator
            .as_ref()
            .map(|a| a.target())
            .unwrap_or(self.pager.progress().page_index)
    }

    fn animate_to(&mut self, to: usize) {
        let from = self.swipe_origin();
        if from == to {
            return;
        }
        let duration = Duration::from_millis(self.config.ui.swipe_duration_ms);
        self.animator = Some(SwipeAnimator::new(from, to, duration));
    }

    /// Drive the in-flight swipe; returns true when a frame was applied
    /// and the next draw will show new state
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animator) = &self.animator else {
            return false;
        };

        let frame = animator.frame(now);
        if animator.is_finished(now) {
            self.animator = None;
        }
        self.apply_progress(frame);
        true
    }

    /// Per-frame progress feed: record it on the pager, translate the
    /// indicator, and apply the container scroll once the selected tab
    /// nears the end of the visible window
    pub fn apply_progress(&mut self, progress: PageProgress) {
        self.pager.set_progress(progress);

        let frame = self.indicator.scroll(
            progress.page_index,
            progress.offset,
            self.strip.child_count(),
        );
        if let Some(scroll_x) = frame.scroll_x {
            self.strip.set_scroll_x(scroll_x);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_some()
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
