// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with the `t` key.
// Each theme defines colors for all UI elements.

use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Dracula,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Dracula,
            ThemeKind::Nord,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Dracula => "Dracula",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Resolve a configured theme name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Dracula => Theme::dracula(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,

    // Chrome
    pub title: Color,
    pub status_bar: Color,

    // Tab bar
    pub tab_active_fg: Color,
    pub tab_active_bg: Color,
    pub tab_inactive: Color,

    // Section content
    pub summary: Color,
    pub task_title: Color,
    pub task_description: Color,
    pub step: Color,
    pub step_number: Color,

    // Selection and copy feedback
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub copied: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::DarkGray,

            title: Color::Cyan,
            status_bar: Color::DarkGray,

            tab_active_fg: Color::Black,
            tab_active_bg: Color::Cyan,
            tab_inactive: Color::Gray,

            summary: Color::DarkGray,
            task_title: Color::Yellow,
            task_description: Color::Gray,
            step: Color::White,
            step_number: Color::DarkGray,

            selected_bg: Color::DarkGray,
            selected_fg: Color::White,
            copied: Color::Green,
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::Gray,

            title: Color::Blue,
            status_bar: Color::Gray,

            tab_active_fg: Color::White,
            tab_active_bg: Color::Blue,
            tab_inactive: Color::DarkGray,

            summary: Color::Gray,
            task_title: Color::Magenta,
            task_description: Color::DarkGray,
            step: Color::Black,
            step_number: Color::Gray,

            selected_bg: Color::Rgb(220, 225, 235),
            selected_fg: Color::Black,
            copied: Color::Rgb(0, 130, 60),
        }
    }

    /// Dracula palette
    pub fn dracula() -> Self {
        Self {
            bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(68, 71, 90),

            title: Color::Rgb(189, 147, 249),
            status_bar: Color::Rgb(98, 114, 164),

            tab_active_fg: Color::Rgb(40, 42, 54),
            tab_active_bg: Color::Rgb(189, 147, 249),
            tab_inactive: Color::Rgb(98, 114, 164),

            summary: Color::Rgb(98, 114, 164),
            task_title: Color::Rgb(241, 250, 140),
            task_description: Color::Rgb(139, 148, 177),
            step: Color::Rgb(248, 248, 242),
            step_number: Color::Rgb(98, 114, 164),

            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(139, 233, 253),
            copied: Color::Rgb(80, 250, 123),
        }
    }

    /// Nord palette
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            border: Color::Rgb(67, 76, 94),

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(76, 86, 106),

            tab_active_fg: Color::Rgb(46, 52, 64),
            tab_active_bg: Color::Rgb(136, 192, 208),
            tab_inactive: Color::Rgb(129, 140, 161),

            summary: Color::Rgb(129, 140, 161),
            task_title: Color::Rgb(235, 203, 139),
            task_description: Color::Rgb(160, 170, 190),
            step: Color::Rgb(216, 222, 233),
            step_number: Color::Rgb(76, 86, 106),

            selected_bg: Color::Rgb(67, 76, 94),
            selected_fg: Color::Rgb(143, 188, 187),
            copied: Color::Rgb(163, 190, 140),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_theme() {
        let mut kind = ThemeKind::Dark;
        let mut seen = Vec::new();
        for _ in 0..ThemeKind::all().len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
        assert_eq!(seen.len(), ThemeKind::all().len());
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ThemeKind::from_name("nord"), Some(ThemeKind::Nord));
        assert_eq!(ThemeKind::from_name("DRACULA"), Some(ThemeKind::Dracula));
        assert_eq!(ThemeKind::from_name("solarized"), None);
    }
}
