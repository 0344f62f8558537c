// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn title_bar() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === Tab Strip ===

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::White)
    }

    // === Indicator ===

    pub fn indicator(fill: Color) -> Style {
        Style::default().fg(fill)
    }

    // === Page Content ===

    pub fn page_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn page_body() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn page_border() -> Style {
        Style::default().fg(Color::Rgb(102, 102, 102))
    }
}

/// Parse color from string
pub fn parse_color(color: &str) -> Color {
    match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        _ => Color::White, // Default matches the original's opaque white fill
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_known_and_fallback() {
        assert_eq!(parse_color("cyan"), Color::Cyan);
        assert_eq!(parse_color("GREY"), Color::Gray);
        assert_eq!(parse_color("#ffffff"), Color::White);
    }
}
