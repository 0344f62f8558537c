// Render module - UI rendering functions

pub mod chrome;
pub mod page;
pub mod tabs;

pub use chrome::{render_status_bar, render_title_bar};
pub use page::render_page;
pub use tabs::{render_indicator, render_tab_strip};
