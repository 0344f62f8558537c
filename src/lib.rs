// Tab Pager Library
// A TUI pager with a swipe-tracking tab strip and triangular indicator

// Core infrastructure - application state, configuration, events
pub mod core;

// Paging - page data, swipe progress, animation
pub mod paging;

// UI - tab strip and indicator widgets
pub mod ui;

// Render - frame drawing functions
pub mod render;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use self::core::{App, AppConfig};
pub use paging::{Page, PageProgress, Pager, SwipeAnimator};
pub use ui::{TabStrip, TriangleIndicator};
pub use constants::*;
