// Tab bar - one tab per section, in runbook order
//
// Built as plain spans rather than the stock Tabs widget so each tab's
// column range is known: the event loop needs those ranges to map mouse
// clicks back to section ids.

use crate::runbook::Runbook;
use crate::tui::theme::Theme;
use crate::util::truncate_utf8_safe;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Clickable range of one tab within the bar
#[derive(Debug, Clone)]
pub struct TabHit {
    /// Column offset from the left edge of the bar
    pub offset: u16,
    pub width: u16,
    pub id: String,
}

/// The built tab bar
pub struct TabsBar {
    pub line: Line<'static>,
    pub hits: Vec<TabHit>,
}

/// Build the tab bar. The tab whose id equals `active_id` is marked active;
/// exactly one tab is active whenever the runbook is non-empty and the id
/// resolves.
pub fn build_tabs(
    runbook: &Runbook,
    active_id: Option<&str>,
    theme: &Theme,
    max_width: u16,
) -> TabsBar {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut hits: Vec<TabHit> = Vec::new();
    let mut cursor: u16 = 0;

    // When the full titles don't fit, squeeze each one to a fair share
    let full_width: usize = runbook
        .sections()
        .iter()
        .map(|s| s.title.width() + 3)
        .sum();
    let title_budget = if full_width > max_width as usize && !runbook.is_empty() {
        (max_width as usize / runbook.len()).saturating_sub(3).max(2)
    } else {
        usize::MAX
    };

    for (position, section) in runbook.sections().iter().enumerate() {
        let is_active = active_id == Some(section.id.as_str());

        let title = truncate_utf8_safe(&section.title, title_budget);
        let label = format!(" {title} ");
        let label_width = label.width() as u16;

        let style = if is_active {
            Style::default()
                .fg(theme.tab_active_fg)
                .bg(theme.tab_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.tab_inactive)
        };

        spans.push(Span::styled(label, style));
        hits.push(TabHit {
            offset: cursor,
            width: label_width,
            id: section.id.clone(),
        });
        cursor = cursor.saturating_add(label_width);

        if position + 1 < runbook.len() {
            spans.push(Span::raw(" "));
            cursor = cursor.saturating_add(1);
        }
    }

    TabsBar {
        line: Line::from(spans),
        hits,
    }
}
