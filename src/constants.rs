// Application constants
// Fixed ratios and timing shared across modules

/// Fraction of one tab cell occupied by the triangle base
pub const TRIANGLE_WIDTH_RATIO: f32 = 1.0 / 6.0;

/// Visible tab count used when configuration is missing or out of range
pub const DEFAULT_VISIBLE_TAB_COUNT: u16 = 5;

/// How many tabs before the right edge the strip starts scrolling.
/// Tuned for the 5-tab default; small visible counts keep the same formula.
pub const AUTO_SCROLL_LEAD: i32 = 3;

/// Event poll interval for the draw loop (milliseconds)
pub const POLL_INTERVAL_MS: u64 = 30;
