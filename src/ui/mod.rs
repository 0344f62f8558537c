// UI module
// Tab strip and indicator widgets

pub mod indicator;
pub mod styles;
pub mod tab_strip;

pub use indicator::{IndicatorGeometry, ScrollFrame, TriangleIndicator};
pub use styles::{parse_color, Styles};
pub use tab_strip::{TabBounds, TabStrip};
