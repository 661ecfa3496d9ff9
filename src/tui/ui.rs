// Frame rendering - called on every draw
//
// Layout, top to bottom: title bar, tab bar, content area, status bar.
// Each pass rebuilds the whole frame from current state and records the
// clickable tab/step regions on the App for mouse dispatch.

use super::app::App;
use super::components::{self, build_section, build_tabs, RenderCtx};
use super::layout::Breakpoint;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use std::time::Instant;

pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background for the whole frame
    let bg = Block::default().style(Style::default().bg(app.theme.bg));
    f.render_widget(bg, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(1), // title bar
        Constraint::Length(1), // tab bar
        Constraint::Min(3),    // section content
        Constraint::Length(2), // status bar (top border + hints)
    ])
    .split(f.area());

    components::title_bar::render(f, chunks[0], app);
    render_tabs(f, chunks[1], app);
    render_content(f, chunks[2], app);
    components::status_bar::render(f, chunks[3], app);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &mut App) {
    let bar = build_tabs(&app.runbook, app.nav.active_id(), &app.theme, area.width);

    app.tab_hits = bar
        .hits
        .iter()
        .filter(|hit| hit.offset < area.width)
        .map(|hit| {
            let width = hit.width.min(area.width - hit.offset);
            let rect = Rect::new(area.x + hit.offset, area.y, width, 1);
            (rect, hit.id.clone())
        })
        .collect();

    f.render_widget(Paragraph::new(bar.line), area);
}

fn render_content(f: &mut Frame, area: Rect, app: &mut App) {
    app.step_hits.clear();

    let theme = app.theme.clone();
    let border = Style::default().fg(theme.border);

    let Some(section) = app.active_section().cloned() else {
        // Degenerate state: nothing is configured
        let placeholder = Paragraph::new("No sections configured.")
            .style(Style::default().fg(theme.summary))
            .block(Block::bordered().border_style(border));
        f.render_widget(placeholder, area);
        return;
    };

    let now = Instant::now();
    let marked = app.feedback.marked_at(now);
    let bp = Breakpoint::from_width(area.width);
    let ctx = RenderCtx {
        theme: &theme,
        selected: Some(app.selected_step),
        marked: &marked,
        show_summary: bp.at_least(Breakpoint::Normal),
    };

    let body = build_section(&section, &ctx);
    let tasks_label = match body.task_count {
        1 => " 1 task ".to_string(),
        n => format!(" {n} tasks "),
    };
    let block = Block::bordered()
        .border_style(border)
        .title_bottom(Line::from(tasks_label).right_aligned());
    let inner = block.inner(area);
    let viewport = inner.height as usize;

    // Keep the selected step inside the viewport
    if let Some(region) = body.steps.get(app.selected_step) {
        if region.first_line < app.scroll {
            app.scroll = region.first_line;
        } else if viewport > 0 && region.first_line + region.height > app.scroll + viewport {
            app.scroll = region.first_line + region.height - viewport;
        }
    }
    app.scroll = app.scroll.min(body.lines.len().saturating_sub(viewport));

    // Record clickable rects for the steps that ended up visible
    for region in &body.steps {
        let Some(top) = region.first_line.checked_sub(app.scroll) else {
            continue;
        };
        if top >= viewport {
            continue;
        }
        let height = region.height.min(viewport - top) as u16;
        app.step_hits.push((
            Rect::new(inner.x, inner.y + top as u16, inner.width, height),
            region.index,
        ));
    }

    let content = Paragraph::new(body.lines)
        .style(Style::default().fg(theme.fg))
        .scroll((app.scroll as u16, 0))
        .block(block);
    f.render_widget(content, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::runbook::{Runbook, Section, Task};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn single_section_runbook() -> Runbook {
        Runbook::new(vec![Section {
            id: "git".into(),
            title: "Git".into(),
            summary: "Version control workflows".into(),
            tasks: vec![Task {
                title: "Check the tree".into(),
                description: String::new(),
                steps: vec!["git status".into()],
            }],
        }])
    }

    fn rendered_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_runbook_renders_the_placeholder() {
        let mut app = App::new(Runbook::new(Vec::new()), &Config::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = rendered_text(&terminal);
        assert!(text.contains("No sections configured."));
        assert!(app.tab_hits.is_empty());
        assert!(app.step_hits.is_empty());
    }

    #[test]
    fn initial_render_shows_the_first_section() {
        let mut app = App::new(single_section_runbook(), &Config::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = rendered_text(&terminal);
        assert!(text.contains("Git"));
        assert!(text.contains("Check the tree"));
        assert!(text.contains("git status"));

        // One tab, one step region
        assert_eq!(app.tab_hits.len(), 1);
        assert_eq!(app.tab_hits[0].1, "git");
        assert_eq!(app.step_hits.len(), 1);
        assert_eq!(app.step_hits[0].1, 0);
    }

    #[test]
    fn clicking_a_recorded_tab_switches_sections() {
        let mut app = App::new(Runbook::builtin(), &Config::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let (rect, id) = app.tab_hits[2].clone();
        assert_eq!(id, "docker");
        app.click(rect.x, rect.y);
        assert_eq!(app.active_section().unwrap().id, "docker");

        // Clicking the now-active tab changes nothing
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        app.selected_step = 1;
        let (rect, _) = app.tab_hits[2].clone();
        app.click(rect.x, rect.y);
        assert_eq!(app.selected_step, 1);
    }
}
