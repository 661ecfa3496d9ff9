// TUI application state
//
// All mutable UI state lives here: the navigation controller (active
// section), the step cursor, the content scroll offset, and the copy
// feedback markers. Handlers in tui::mod mutate it; the draw pass in
// tui::ui reads it and records the clickable regions for the next
// mouse event.

use super::clipboard::{self, CopyOutcome};
use super::feedback::CopyFeedback;
use super::input::InputHandler;
use super::nav::Navigation;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::runbook::{Runbook, Section};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

/// Main application state for the TUI
pub struct App {
    /// The content store; loaded once, never mutated
    pub runbook: Runbook,

    /// Navigation controller - owns the active section id
    pub nav: Navigation,

    /// Flattened index of the selected step within the active section
    pub selected_step: usize,

    /// Content scroll offset in lines; the draw pass adjusts it to keep
    /// the selected step visible
    pub scroll: usize,

    /// Per-step "copied" markers for the active section
    pub feedback: CopyFeedback,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Input handler for per-key press/repeat behavior
    input: InputHandler,

    /// Clickable regions recorded by the last draw pass
    pub tab_hits: Vec<(Rect, String)>,
    pub step_hits: Vec<(Rect, usize)>,
}

impl App {
    pub fn new(runbook: Runbook, config: &Config) -> Self {
        let nav = Navigation::new(&runbook);
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "unknown theme, falling back to default");
            ThemeKind::default()
        });

        Self {
            runbook,
            nav,
            selected_step: 0,
            scroll: 0,
            feedback: CopyFeedback::new(config.copy_feedback()),
            theme_kind,
            theme: theme_kind.theme(),
            should_quit: false,
            input: InputHandler::default(),
            tab_hits: Vec::new(),
            step_hits: Vec::new(),
        }
    }

    /// The section currently shown in the content area
    pub fn active_section(&self) -> Option<&Section> {
        self.nav.active_section(&self.runbook)
    }

    /// Position of the displayed section, for the status bar
    pub fn active_position(&self) -> Option<usize> {
        self.active_section()
            .and_then(|s| self.runbook.position(&s.id))
    }

    fn step_count(&self) -> usize {
        self.active_section().map_or(0, Section::step_count)
    }

    /// A section change invalidates everything keyed to the old section
    fn reset_section_view(&mut self) {
        self.selected_step = 0;
        self.scroll = 0;
        self.feedback.clear();
    }

    /// Select a section by id. Re-selecting the active section leaves the
    /// cursor, scroll and copy markers untouched.
    pub fn select_section(&mut self, id: &str) {
        if self.nav.select(&self.runbook, id) {
            self.reset_section_view();
        }
    }

    pub fn select_section_index(&mut self, index: usize) {
        if self.nav.select_index(&self.runbook, index) {
            self.reset_section_view();
        }
    }

    pub fn next_section(&mut self) {
        if self.nav.select_next(&self.runbook) {
            self.reset_section_view();
        }
    }

    pub fn prev_section(&mut self) {
        if self.nav.select_prev(&self.runbook) {
            self.reset_section_view();
        }
    }

    pub fn select_next_step(&mut self) {
        if self.selected_step + 1 < self.step_count() {
            self.selected_step += 1;
        }
    }

    pub fn select_prev_step(&mut self) {
        self.selected_step = self.selected_step.saturating_sub(1);
    }

    /// Keyboard activation of the selected step (Enter or Space)
    pub fn activate_selected(&mut self) {
        self.copy_step(self.selected_step);
    }

    /// Copy a step's literal text. On success the step gets its transient
    /// marker; on failure the reason is logged and nothing else happens -
    /// the absent marker is the only user-visible signal.
    pub fn copy_step(&mut self, index: usize) {
        let Some(text) = self
            .active_section()
            .and_then(|s| s.step(index))
            .map(str::to_string)
        else {
            return;
        };

        match clipboard::copy_text(&text) {
            CopyOutcome::Copied(backend) => {
                tracing::debug!(backend = backend.name(), step = index, "step copied");
                self.feedback.mark(index, Instant::now());
            }
            CopyOutcome::Failed(reason) => {
                tracing::warn!(%reason, step = index, "copy failed");
            }
        }
    }

    /// Mouse click dispatch via the regions recorded by the last draw
    pub fn click(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);

        if let Some(id) = self
            .tab_hits
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, id)| id.clone())
        {
            self.select_section(&id);
            return;
        }

        if let Some(index) = self
            .step_hits
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|&(_, index)| index)
        {
            self.selected_step = index;
            self.copy_step(index);
        }
    }

    /// Periodic tick: drop expired copy markers
    pub fn tick(&mut self) {
        self.feedback.sweep(Instant::now());
    }

    /// Cycle to the next theme
    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input.handle_key_release(key);
    }
}
