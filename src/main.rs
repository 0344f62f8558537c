// Tab Pager
// TUI pager with a swipe-tracking tab strip indicator

// MODULES ------------------>>

mod config;
mod config_validation;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

// Module imports
use config_validation::load_and_validate_config;
use tab_pager::core::{resolve_visible_tab_count, App, AppEvent, EventHandler, UiSettings};
use tab_pager::paging::Page;
use tab_pager::render::{
    render_indicator, render_page, render_status_bar, render_tab_strip, render_title_bar,
};
use tab_pager::{AppConfig, POLL_INTERVAL_MS};

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> anyhow::Result<()> {
    // Load configuration from YAML file (falls back to built-in defaults)
    let yaml_config = load_and_validate_config(None);

    // Convert YAML pager settings > resolved UI settings
    let ui = UiSettings {
        visible_tab_count: resolve_visible_tab_count(yaml_config.pager.visible_tab_count),
        indicator_color: yaml_config.pager.indicator_color.clone(),
        swipe_duration_ms: yaml_config.pager.swipe_duration_ms,
        mouse_enabled: yaml_config.pager.mouse_enabled,
    };
    let mouse_enabled = ui.mouse_enabled;

    let pages: Vec<Page> = yaml_config
        .pages
        .iter()
        .map(|p| Page {
            id: p.id.clone(),
            title: p.title.clone(),
            body: p.body.clone(),
        })
        .collect();

    let title = yaml_config.application.title.clone();
    let status_text = yaml_config.application.status_bar.default_text.clone();

    // Initialize application state
    let mut app = App::new(AppConfig { ui }, pages);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Tab strip area from the last draw, for mouse click mapping
    let mut strip_area = Rect::default();

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                           MAIN LOOP                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    loop {
        // Advance any in-flight swipe before drawing
        app.tick(Instant::now());

        terminal.draw(|f| {
            let area = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // title
                    Constraint::Length(1), // tab strip
                    Constraint::Length(1), // indicator
                    Constraint::Min(0),    // page content
                    Constraint::Length(1), // status bar
                ])
                .split(area);

            // Relayout strip and indicator when the terminal width changed
            if app.strip.width() != chunks[1].width {
                app.on_resize(chunks[1].width);
            }
            strip_area = chunks[1];

            render_title_bar(f, &title, chunks[0]);
            render_tab_strip(f, &app.strip, app.pager.progress().page_index, chunks[1]);
            render_indicator(f, &app.indicator, app.strip.scroll_x(), chunks[2]);
            render_page(f, &app.pager, chunks[3]);
            render_status_bar(f, &status_text, chunks[4]);
        })?;

        // ┌──────────────────────────────────────────────────────────────────────────────────────────────┐
        // │                              Handle events (keyboard and mouse)                              │
        // └──────────────────────────────────────────────────────────────────────────────────────────────┘

        match crossterm::event::poll(Duration::from_millis(POLL_INTERVAL_MS)) {
            Ok(true) => {
                match event::read()? {
                    Event::Key(key) => {
                        let app_event = EventHandler::handle(Event::Key(key));
                        handle_event(&mut app, app_event);
                    }
                    Event::Mouse(mouse_event) => {
                        // Handle mouse clicks on tabs
                        if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) {
                            if let Some(clicked_tab) =
                                app.strip.tab_at(mouse_event.column, mouse_event.row, strip_area)
                            {
                                app.jump_to(clicked_tab);
                            }
                        }
                    }
                    Event::Resize(_, _) => {
                        // Terminal resize - will be handled on next draw
                    }
                    _ => {}
                }
            }
            Ok(false) => {
                // No event available
            }
            Err(_) => {
                // Error polling, continue anyway
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal, releasing mouse capture only if it was taken
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

/// Handle an application event
fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::SwipeNext => app.swipe_next(),
        AppEvent::SwipePrevious => app.swipe_previous(),
        AppEvent::FirstPage => app.jump_to(0),
        AppEvent::LastPage => app.jump_to_last(),
        AppEvent::None => {}
    }
}
