// Status bar component
//
// Renders key hints at the bottom, plus the section position.
// Adapts to terminal width: full hints on wide terminals, a compact
// subset on narrow ones.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let position = match (app.active_position(), app.runbook.len()) {
        (Some(i), n) if n > 0 => format!(" {}/{} │", i + 1, n),
        _ => String::new(),
    };

    let hints = if bp.at_least(Breakpoint::Normal) {
        "←/→ sections │ ↑/↓ steps │ Enter/Space copy │ 1-9 jump │ t theme │ q quit"
    } else {
        "←/→ ↑/↓ │ Enter copy │ q quit"
    };

    let status = Paragraph::new(format!("{position} {hints}"))
        .style(Style::default().fg(app.theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(status, area);
}
