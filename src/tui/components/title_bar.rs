// Title bar component
//
// Single line: app name and version on the left, theme name on the right.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let left = format!(" runbook v{VERSION}");
    let right = format!("{} ", app.theme_kind.name());

    let pad = (area.width as usize)
        .saturating_sub(left.len())
        .saturating_sub(right.len());

    let line = Line::from(vec![
        Span::styled(
            left,
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(app.theme.status_bar)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
