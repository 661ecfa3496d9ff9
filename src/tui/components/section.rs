// Section renderer - builds the content area for one section
//
// `build_section` and `build_task` are pure functions of their inputs: the
// record itself plus a render context carrying the theme, the selected step
// and the set of steps with a live "copied" marker. They return lines plus
// step regions; the draw pass turns regions into clickable rects and the
// tests count them directly.

use crate::runbook::{Section, Task};
use crate::tui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::HashSet;

/// Inputs a build pass needs beyond the record itself
pub struct RenderCtx<'a> {
    pub theme: &'a Theme,
    /// Flattened index of the selected step within the section
    pub selected: Option<usize>,
    /// Flattened indices of steps with a live "copied" marker
    pub marked: &'a HashSet<usize>,
    /// Narrow terminals drop the summary line
    pub show_summary: bool,
}

/// One step's place within the built lines
#[derive(Debug, Clone)]
pub struct StepRegion {
    /// Flattened index within the section
    pub index: usize,
    /// First line of the step within the body
    pub first_line: usize,
    /// Rows occupied (multi-line steps span several)
    pub height: usize,
}

/// A task card: title, description, ordered steps
pub struct TaskBody<'a> {
    pub lines: Vec<Line<'a>>,
    /// Step regions with `first_line` relative to this card
    pub steps: Vec<StepRegion>,
}

/// A full section body: header plus task cards, flattened to lines
pub struct SectionBody<'a> {
    pub lines: Vec<Line<'a>>,
    /// Step regions with `first_line` absolute within `lines`
    pub steps: Vec<StepRegion>,
    pub task_count: usize,
}

/// Build the body for a section: one header, then one card per task, in
/// task order.
pub fn build_section<'a>(section: &'a Section, ctx: &RenderCtx<'_>) -> SectionBody<'a> {
    let theme = ctx.theme;
    let mut lines: Vec<Line<'a>> = Vec::new();
    let mut steps: Vec<StepRegion> = Vec::new();

    // Header: title, summary, spacer
    lines.push(Line::from(Span::styled(
        section.title.as_str(),
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    )));
    if ctx.show_summary && !section.summary.is_empty() {
        lines.push(Line::from(Span::styled(
            section.summary.as_str(),
            Style::default().fg(theme.summary),
        )));
    }
    lines.push(Line::default());

    // Task cards, keeping the flattened step numbering continuous
    let mut next_step = 0;
    for task in &section.tasks {
        let card = build_task(task, next_step, ctx);
        next_step += task.steps.len();

        let offset = lines.len();
        lines.extend(card.lines);
        steps.extend(card.steps.into_iter().map(|mut region| {
            region.first_line += offset;
            region
        }));
        lines.push(Line::default());
    }

    SectionBody {
        lines,
        steps,
        task_count: section.tasks.len(),
    }
}

/// Build one task card: title, description, then the ordered step list.
/// `first_step` is the flattened index of the task's first step within its
/// section, so selection and markers line up across cards.
pub fn build_task<'a>(task: &'a Task, first_step: usize, ctx: &RenderCtx<'_>) -> TaskBody<'a> {
    let theme = ctx.theme;
    let mut lines: Vec<Line<'a>> = Vec::new();
    let mut steps: Vec<StepRegion> = Vec::new();

    lines.push(Line::from(Span::styled(
        task.title.as_str(),
        Style::default()
            .fg(theme.task_title)
            .add_modifier(Modifier::BOLD),
    )));
    if !task.description.is_empty() {
        lines.push(Line::from(Span::styled(
            task.description.as_str(),
            Style::default().fg(theme.task_description),
        )));
    }

    for (position, step) in task.steps.iter().enumerate() {
        let index = first_step + position;
        let selected = ctx.selected == Some(index);
        let marked = ctx.marked.contains(&index);

        let gutter_style = Style::default().fg(theme.step_number);
        let mut text_style = Style::default().fg(if marked { theme.copied } else { theme.step });
        if selected {
            text_style = text_style.fg(theme.selected_fg).bg(theme.selected_bg);
            if marked {
                text_style = text_style.fg(theme.copied);
            }
        }

        let first_line = lines.len();
        // The literal text renders verbatim; embedded newlines span rows
        let mut rows = step.split('\n');
        let first_row = rows.next().unwrap_or_default();

        let mut spans = vec![
            Span::styled(format!("  {:>2} │ ", position + 1), gutter_style),
            Span::styled(first_row, text_style),
        ];
        if marked {
            spans.push(Span::styled(
                "  ✓ copied",
                Style::default()
                    .fg(theme.copied)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));

        for row in rows {
            lines.push(Line::from(vec![
                Span::styled("     │ ".to_string(), gutter_style),
                Span::styled(row, text_style),
            ]));
        }

        steps.push(StepRegion {
            index,
            first_line,
            height: lines.len() - first_line,
        });
    }

    TaskBody { lines, steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runbook::Runbook;

    fn plain_ctx<'a>(theme: &'a Theme, marked: &'a HashSet<usize>) -> RenderCtx<'a> {
        RenderCtx {
            theme,
            selected: None,
            marked,
            show_summary: true,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn section_has_one_header_and_a_card_per_task() {
        let theme = Theme::dark();
        let marked = HashSet::new();
        let rb = Runbook::builtin();
        for section in rb.sections() {
            let body = build_section(section, &plain_ctx(&theme, &marked));
            assert_eq!(line_text(&body.lines[0]), section.title);
            assert_eq!(line_text(&body.lines[1]), section.summary);
            assert_eq!(body.task_count, section.tasks.len());
            assert_eq!(body.steps.len(), section.step_count());
        }
    }

    #[test]
    fn task_steps_keep_literal_text_and_order() {
        let theme = Theme::dark();
        let marked = HashSet::new();
        let rb = Runbook::builtin();
        let git = rb.get("git").unwrap();

        let body = build_section(git, &plain_ctx(&theme, &marked));
        let expected: Vec<&str> = git
            .tasks
            .iter()
            .flat_map(|t| t.steps.iter().map(String::as_str))
            .collect();
        assert_eq!(body.steps.len(), expected.len());

        // Each step row shows the literal command after the gutter, and
        // flattened indices are contiguous and ordered
        for (i, (region, step)) in body.steps.iter().zip(expected).enumerate() {
            assert_eq!(region.index, i);
            let row = line_text(&body.lines[region.first_line]);
            assert!(row.ends_with(step), "{row:?} does not end with {step:?}");
        }
    }

    #[test]
    fn build_task_counts_steps_exactly() {
        let theme = Theme::dark();
        let marked = HashSet::new();
        let task = Task {
            title: "Inspect".into(),
            description: "Look before leaping".into(),
            steps: vec!["ls -la".into(), "df -h".into(), "uptime".into()],
        };
        let body = build_task(&task, 0, &plain_ctx(&theme, &marked));
        assert_eq!(body.steps.len(), 3);
        assert_eq!(line_text(&body.lines[0]), "Inspect");
        // Step rows carry the literal command after the gutter
        assert!(line_text(&body.lines[2]).ends_with("ls -la"));
        assert!(line_text(&body.lines[4]).ends_with("uptime"));
    }

    #[test]
    fn multi_line_step_spans_multiple_rows() {
        let theme = Theme::dark();
        let marked = HashSet::new();
        let task = Task {
            title: "Heredoc".into(),
            description: String::new(),
            steps: vec!["cat <<EOF\nhello\nEOF".into()],
        };
        let body = build_task(&task, 0, &plain_ctx(&theme, &marked));
        assert_eq!(body.steps.len(), 1);
        assert_eq!(body.steps[0].height, 3);
        let first = body.steps[0].first_line;
        assert!(line_text(&body.lines[first]).ends_with("cat <<EOF"));
        assert!(line_text(&body.lines[first + 1]).ends_with("hello"));
        assert!(line_text(&body.lines[first + 2]).ends_with("EOF"));
    }

    #[test]
    fn marked_step_carries_the_copied_marker() {
        let theme = Theme::dark();
        let marked: HashSet<usize> = [1].into();
        let task = Task {
            title: "T".into(),
            description: String::new(),
            steps: vec!["first".into(), "second".into()],
        };
        let body = build_task(&task, 0, &plain_ctx(&theme, &marked));
        let unmarked_row = line_text(&body.lines[body.steps[0].first_line]);
        let marked_row = line_text(&body.lines[body.steps[1].first_line]);
        assert!(!unmarked_row.contains("copied"));
        assert!(marked_row.contains("✓ copied"));
        // The marker is appended; the literal text is untouched
        assert!(marked_row.contains("second"));
    }

    #[test]
    fn single_section_single_step_scenario() {
        // One section "git" with one task and one step "git status"
        let theme = Theme::dark();
        let marked = HashSet::new();
        let section = Section {
            id: "git".into(),
            title: "Git".into(),
            summary: "basics".into(),
            tasks: vec![Task {
                title: "Check the tree".into(),
                description: String::new(),
                steps: vec!["git status".into()],
            }],
        };
        let body = build_section(&section, &plain_ctx(&theme, &marked));
        assert_eq!(body.task_count, 1);
        assert_eq!(body.steps.len(), 1);
        let step_row = line_text(&body.lines[body.steps[0].first_line]);
        assert!(step_row.ends_with("git status"));
    }
}
