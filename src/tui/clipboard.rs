//! Clipboard adapter for copying step text
//!
//! Best-effort with two paths. The primary path uses `arboard` for a native
//! system clipboard (Windows, macOS, Linux); the clipboard is created fresh
//! each time to avoid holding resources. When no system clipboard exists
//! (headless Linux, SSH sessions without a display server), the fallback
//! writes an OSC 52 escape sequence that clipboard-aware terminals honor.
//!
//! A failure on the primary path is reported as-is, not retried over the
//! fallback: a clipboard that exists but rejects the write is telling us
//! something the escape sequence would only paper over.

use anyhow::{Context, Result};
use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::{self, Write};

/// Which copy path carried the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyBackend {
    /// Native system clipboard via arboard
    System,
    /// OSC 52 escape sequence written to the terminal
    Osc52,
}

impl CopyBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Osc52 => "osc52",
        }
    }
}

/// Result of a copy attempt. The caller decides what to do with a failure;
/// nothing in here panics or interrupts the event loop.
#[derive(Debug)]
pub enum CopyOutcome {
    /// Text reached a clipboard
    Copied(CopyBackend),
    /// Neither path could deliver the text
    Failed(String),
}

impl CopyOutcome {
    #[allow(dead_code)]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied(_))
    }
}

/// Copy text to the clipboard, best-effort.
pub fn copy_text(text: &str) -> CopyOutcome {
    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => CopyOutcome::Copied(CopyBackend::System),
            Err(e) => CopyOutcome::Failed(format!("system clipboard write failed: {e}")),
        },
        // No system clipboard available - try the escape-sequence fallback
        Err(_) => match osc52_copy(text) {
            Ok(()) => CopyOutcome::Copied(CopyBackend::Osc52),
            Err(e) => CopyOutcome::Failed(format!("OSC 52 fallback failed: {e}")),
        },
    }
}

fn osc52_copy(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout
        .write_all(osc52_sequence(text).as_bytes())
        .context("failed to write escape sequence")?;
    stdout.flush().context("failed to flush terminal")?;
    Ok(())
}

fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x1b\\", STANDARD.encode(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_sequence_wraps_base64_payload() {
        let seq = osc52_sequence("git status");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with("\x1b\\"));

        let payload = &seq["\x1b]52;c;".len()..seq.len() - 2];
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, b"git status");
    }

    #[test]
    fn outcome_reports_copied_state() {
        assert!(CopyOutcome::Copied(CopyBackend::System).is_copied());
        assert!(!CopyOutcome::Failed("nope".into()).is_copied());
        assert_eq!(CopyBackend::Osc52.name(), "osc52");
    }
}
