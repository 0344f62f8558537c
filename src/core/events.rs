// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Swipe to the next page
    SwipeNext,

    /// Swipe to the previous page
    SwipePrevious,

    /// Jump to the first page
    FirstPage,

    /// Jump to the last page
    LastPage,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events.
/// Mouse clicks need layout knowledge and are resolved in the main loop
/// through the tab strip's cell bounds.
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
            KeyCode::Esc => AppEvent::Quit,

            // Swiping
            KeyCode::Right | KeyCode::Char('l') => AppEvent::SwipeNext,
            KeyCode::Left | KeyCode::Char('h') => AppEvent::SwipePrevious,

            // Jumps
            KeyCode::Home => AppEvent::FirstPage,
            KeyCode::End => AppEvent::LastPage,

            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys_map_to_swipes() {
        assert_eq!(EventHandler::handle(press(KeyCode::Right)), AppEvent::SwipeNext);
        assert_eq!(EventHandler::handle(press(KeyCode::Left)), AppEvent::SwipePrevious);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('l'))), AppEvent::SwipeNext);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('q'))), AppEvent::Quit);
        assert_eq!(EventHandler::handle(press(KeyCode::Esc)), AppEvent::Quit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(EventHandler::handle(Event::Key(key)), AppEvent::None);
    }
}
