// Navigation controller - owns the active section id
//
// The active id is the single piece of navigation state in the app. It is
// private to this struct and changes only through the select operations, so
// every caller sees the same rules: selecting the active section is a no-op,
// and an id that no longer resolves falls back to the first section for
// display without rewriting the stored state.

use crate::runbook::{Runbook, Section};

pub struct Navigation {
    active: Option<String>,
}

impl Navigation {
    /// Start on the first section, or nowhere when the runbook is empty.
    pub fn new(runbook: &Runbook) -> Self {
        Self {
            active: runbook.first_id().map(str::to_string),
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Select a section by id.
    ///
    /// Returns true when the active section actually changed; the caller
    /// resets its per-section view state (cursor, scroll, copy markers) only
    /// then. Selecting the already-active section or an unknown id is a
    /// no-op returning false.
    pub fn select(&mut self, runbook: &Runbook, id: &str) -> bool {
        if self.active.as_deref() == Some(id) {
            return false;
        }
        if runbook.get(id).is_none() {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Select a section by its position in the runbook.
    pub fn select_index(&mut self, runbook: &Runbook, index: usize) -> bool {
        let Some(section) = runbook.sections().get(index) else {
            return false;
        };
        let id = section.id.clone();
        self.select(runbook, &id)
    }

    /// Cycle to the next section, wrapping at the end.
    pub fn select_next(&mut self, runbook: &Runbook) -> bool {
        let Some(current) = self.resolved_index(runbook) else {
            return false;
        };
        self.select_index(runbook, (current + 1) % runbook.len())
    }

    /// Cycle to the previous section, wrapping at the start.
    pub fn select_prev(&mut self, runbook: &Runbook) -> bool {
        let Some(current) = self.resolved_index(runbook) else {
            return false;
        };
        self.select_index(runbook, (current + runbook.len() - 1) % runbook.len())
    }

    /// The section to display.
    ///
    /// An active id with no match resolves to the first section - this
    /// tolerates drift but deliberately leaves the stored id untouched.
    /// `None` only when the runbook is empty.
    pub fn active_section<'a>(&self, runbook: &'a Runbook) -> Option<&'a Section> {
        if runbook.is_empty() {
            return None;
        }
        self.active
            .as_deref()
            .and_then(|id| runbook.get(id))
            .or_else(|| runbook.sections().first())
    }

    /// Position of the displayed section within the runbook.
    fn resolved_index(&self, runbook: &Runbook) -> Option<usize> {
        if runbook.is_empty() {
            return None;
        }
        Some(
            self.active
                .as_deref()
                .and_then(|id| runbook.position(id))
                .unwrap_or(0),
        )
    }
}
