// Swipe Animator
// Time-based interpolation producing the per-frame page progress stream

use std::time::{Duration, Instant};

use super::PageProgress;

/// Animates a swipe between two pages, emitting the continuous
/// (page, offset) stream the indicator consumes. Replaces the swipe
/// physics the original got from its platform pager: position sweeps
/// from the source page to the target with an ease-out curve, and the
/// final frame reports exactly (target, 0.0).
pub struct SwipeAnimator {
    from: usize,
    to: usize,
    started: Instant,
    duration: Duration,
}

impl SwipeAnimator {
    pub fn new(from: usize, to: usize, duration: Duration) -> Self {
        Self::start_at(from, to, duration, Instant::now())
    }

    /// Start with an explicit clock reading (tests drive this directly)
    pub fn start_at(from: usize, to: usize, duration: Duration, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
        }
    }

    pub fn target(&self) -> usize {
        self.to
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= self.duration
    }

    /// Progress for the given clock reading. Forward swipes report the
    /// source page with a rising offset; backward swipes report the
    /// destination page with a falling offset, matching pager-callback
    /// conventions.
    pub fn frame(&self, now: Instant) -> PageProgress {
        if self.is_finished(now) || self.duration.is_zero() {
            return PageProgress::settled(self.to);
        }

        let t = now.duration_since(self.started).as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out_cubic(t.clamp(0.0, 1.0));
        let position = self.from as f32 + (self.to as f32 - self.from as f32) * eased;

        let page = position.floor();
        PageProgress::new(page as usize, position - page)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(200);

    #[test]
    fn test_starts_at_source_page() {
        let start = Instant::now();
        let animator = SwipeAnimator::start_at(2, 3, DURATION, start);
        let frame = animator.frame(start);
        assert_eq!(frame.page_index, 2);
        assert_eq!(frame.offset, 0.0);
    }

    #[test]
    fn test_forward_swipe_reports_source_page_mid_flight() {
        let start = Instant::now();
        let animator = SwipeAnimator::start_at(2, 3, DURATION, start);
        let frame = animator.frame(start + Duration::from_millis(100));
        assert_eq!(frame.page_index, 2);
        assert!(frame.offset > 0.0 && frame.offset < 1.0);
    }

    #[test]
    fn test_backward_swipe_reports_destination_page_mid_flight() {
        let start = Instant::now();
        let animator = SwipeAnimator::start_at(3, 2, DURATION, start);
        let frame = animator.frame(start + Duration::from_millis(100));
        assert_eq!(frame.page_index, 2);
        assert!(frame.offset > 0.0 && frame.offset < 1.0);
    }

    #[test]
    fn test_settle_frame_is_exact() {
        let start = Instant::now();
        let animator = SwipeAnimator::start_at(2, 3, DURATION, start);
        let frame = animator.frame(start + DURATION);
        assert_eq!(frame, PageProgress::settled(3));
        assert!(animator.is_finished(start + DURATION));
    }

    #[test]
    fn test_offsets_stay_in_unit_interval() {
        let start = Instant::now();
        let animator = SwipeAnimator::start_at(0, 4, DURATION, start);
        for ms in (0..=200).step_by(10) {
            let frame = animator.frame(start + Duration::from_millis(ms));
            assert!(frame.offset >= 0.0 && frame.offset < 1.0);
            assert!(frame.page_index <= 4);
        }
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let start = Instant::now();
        let animator = SwipeAnimator::start_at(1, 2, Duration::ZERO, start);
        assert_eq!(animator.frame(start), PageProgress::settled(2));
    }
}
