// Runbook content store
//
// The runbook is an ordered list of sections, each holding ordered tasks,
// each holding ordered command steps. It is loaded once at startup and never
// mutated: the TUI only ever reads from it.
//
// Sources, in order of preference:
// - a JSON or TOML file given on the command line / config / RUNBOOK_FILE
// - the built-in cheat sheets compiled into the binary (builtin.json)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Default cheat-sheet content, embedded at compile time.
const BUILTIN: &str = include_str!("builtin.json");

/// A top-level topic grouping (e.g. "Git"). One tab each.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Unique identifier; this is the section's identity
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A named procedure with ordered command steps. One card each.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Literal command-line strings; rendered verbatim, copied verbatim
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Section {
    /// Total number of steps across all tasks, in task order.
    pub fn step_count(&self) -> usize {
        self.tasks.iter().map(|t| t.steps.len()).sum()
    }

    /// Look up a step by its flattened index across all tasks.
    pub fn step(&self, index: usize) -> Option<&str> {
        self.tasks
            .iter()
            .flat_map(|t| t.steps.iter())
            .nth(index)
            .map(String::as_str)
    }
}

/// TOML runbook files wrap the list in a top-level `[[sections]]` table;
/// JSON files may use either the bare array or the wrapped form.
#[derive(Debug, Deserialize)]
struct RunbookFile {
    #[serde(default)]
    sections: Vec<Section>,
}

/// The content store: an ordered, immutable sequence of sections.
#[derive(Debug, Clone)]
pub struct Runbook {
    sections: Vec<Section>,
}

impl Runbook {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The built-in cheat sheets (Git, SQL, Docker, Kafka).
    pub fn builtin() -> Self {
        let sections =
            serde_json::from_str(BUILTIN).expect("built-in runbook data is valid JSON");
        Self::new(sections)
    }

    /// Load a runbook from a JSON or TOML file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runbook file {}", path.display()))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let sections = if is_toml {
            let file: RunbookFile = toml::from_str(&contents)
                .with_context(|| format!("invalid TOML runbook {}", path.display()))?;
            file.sections
        } else {
            Self::parse_json(&contents)
                .with_context(|| format!("invalid JSON runbook {}", path.display()))?
        };

        Ok(Self::new(sections))
    }

    /// JSON runbooks are a bare array of sections, with the wrapped
    /// `{"sections": [...]}` form accepted as well.
    fn parse_json(contents: &str) -> Result<Vec<Section>, serde_json::Error> {
        serde_json::from_str::<Vec<Section>>(contents)
            .or_else(|err| {
                serde_json::from_str::<RunbookFile>(contents)
                    .map(|file| file.sections)
                    // Report the error from the primary form; it is
                    // the one users actually write.
                    .map_err(|_| err)
            })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Id of the first section, the default active section.
    pub fn first_id(&self) -> Option<&str> {
        self.sections.first().map(|s| s.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_parses_and_keeps_order() {
        let rb = Runbook::builtin();
        let ids: Vec<&str> = rb.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["git", "sql", "docker", "kafka"]);
        assert_eq!(rb.first_id(), Some("git"));
    }

    #[test]
    fn builtin_sections_have_tasks_and_steps() {
        let rb = Runbook::builtin();
        let git = rb.get("git").unwrap();
        assert_eq!(git.title, "Git");
        assert_eq!(git.tasks.len(), 5);
        assert_eq!(git.tasks[0].steps[0], "git checkout main");
        // Steps keep shell quoting verbatim
        let sql = rb.get("sql").unwrap();
        assert!(sql.tasks[1].steps[0].contains("\\copy"));
    }

    #[test]
    fn flattened_step_lookup_spans_tasks() {
        let section = Section {
            id: "s".into(),
            title: "S".into(),
            summary: String::new(),
            tasks: vec![
                Task {
                    title: "a".into(),
                    description: String::new(),
                    steps: vec!["one".into(), "two".into()],
                },
                Task {
                    title: "b".into(),
                    description: String::new(),
                    steps: vec!["three".into()],
                },
            ],
        };
        assert_eq!(section.step_count(), 3);
        assert_eq!(section.step(0), Some("one"));
        assert_eq!(section.step(2), Some("three"));
        assert_eq!(section.step(3), None);
    }

    #[test]
    fn get_by_unknown_id_is_none() {
        let rb = Runbook::builtin();
        assert!(rb.get("nope").is_none());
        assert_eq!(rb.position("docker"), Some(2));
    }

    #[test]
    fn json_accepts_bare_array_and_wrapped_form() {
        let bare = r#"[{"id":"x","title":"X","summary":"","tasks":[]}]"#;
        let wrapped = r#"{"sections":[{"id":"x","title":"X"}]}"#;
        assert_eq!(Runbook::parse_json(bare).unwrap().len(), 1);
        assert_eq!(Runbook::parse_json(wrapped).unwrap().len(), 1);
    }

    #[test]
    fn empty_runbook_has_no_first_id() {
        let rb = Runbook::new(Vec::new());
        assert!(rb.is_empty());
        assert_eq!(rb.first_id(), None);
    }
}
