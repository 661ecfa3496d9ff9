// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Rendering the tab bar and section content
// - Copying steps to the clipboard with transient feedback

pub mod app;
pub mod clipboard;
pub mod components;
pub mod feedback;
pub mod input;
pub mod layout;
pub mod nav;
pub mod theme;
mod ui;

use crate::config::Config;
use crate::runbook::Runbook;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. The first draw inside the loop is the initial render.
pub async fn run_tui(runbook: Runbook, config: &Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(runbook, config);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles two event sources:
/// 1. Keyboard and mouse input (navigation, copy)
/// 2. Timer ticks (so expiring "copied" markers repaint without input)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        // Draw the UI
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for marker expiry and redraw
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            // Press/repeat gating per key behavior
            if !app.handle_key_press(key) {
                return;
            }

            match key {
                // Quit
                KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
                // Section navigation
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_section(),
                KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.prev_section(),
                // Step cursor
                KeyCode::Down | KeyCode::Char('j') => app.select_next_step(),
                KeyCode::Up | KeyCode::Char('k') => app.select_prev_step(),
                // Keyboard activation: both keys copy the selected step
                KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected(),
                // Theme cycling
                KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),
                // Direct section selection
                KeyCode::Char(c @ '1'..='9') => {
                    app.select_section_index((c as usize) - ('1' as usize));
                }
                _ => {}
            }
        }
        KeyEventKind::Release => app.handle_key_release(key_event.code),
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        // Click dispatch: a tab selects its section, a step copies itself
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollUp => app.select_prev_step(),
        MouseEventKind::ScrollDown => app.select_next_step(),
        _ => {}
    }
}
