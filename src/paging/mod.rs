// Paging module
// Page data, swipe progress, and the animation that drives it

pub mod animator;
pub mod pager;

pub use animator::SwipeAnimator;
pub use pager::{Page, PageProgress, Pager};
