// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

use crate::constants::DEFAULT_VISIBLE_TAB_COUNT;

/// Application-level configuration for tab-pager.
/// Built from the runtime YAML; missing keys fall back to the
/// `compiled` constants through the loader's serde defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI and display settings
    pub ui: UiSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Number of tab cells shown on screen at once without scrolling
    pub visible_tab_count: u16,

    /// Indicator triangle fill color name
    pub indicator_color: String,

    /// Duration of one animated page swipe
    pub swipe_duration_ms: u64,

    /// Enable mouse support (click a tab to jump to its page)
    pub mouse_enabled: bool,
}

/// Resolve a configured visible tab count, falling back to the default
/// for out-of-range values. Zero would make every cell-width division
/// degenerate, so it falls back the same way negative values do.
pub fn resolve_visible_tab_count(raw: i64) -> u16 {
    if raw < 1 || raw > u16::MAX as i64 {
        DEFAULT_VISIBLE_TAB_COUNT
    } else {
        raw as u16
    }
}
