// CLI module - command-line argument parsing and handlers
//
// The positional argument and --theme flag override config values.
// The `config` subcommand manages the config file:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Runbook - tabbed command-line cheat sheets for the terminal
#[derive(Parser)]
#[command(name = "runbook")]
#[command(version = VERSION)]
#[command(about = "Tabbed command-line cheat sheets for the terminal", long_about = None)]
pub struct Cli {
    /// Runbook file (JSON or TOML); built-in cheat sheets when omitted
    pub file: Option<PathBuf>,

    /// Color theme (Dark, Light, Dracula, Nord)
    #[arg(long)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Overrides carried from the CLI into startup
pub struct CliArgs {
    pub file: Option<PathBuf>,
    pub theme: Option<String>,
}

/// Parse arguments and handle subcommands.
/// Returns `None` if a subcommand was handled (caller should exit).
pub fn handle_cli() -> Option<CliArgs> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            handle_config_command(show, reset, path);
            None
        }
        None => Some(CliArgs {
            file: cli.file,
            theme: cli.theme,
        }),
    }
}

fn handle_config_command(show: bool, reset: bool, path: bool) {
    let config_path = Config::config_path();

    if path {
        match &config_path {
            Some(p) => println!("{}", p.display()),
            None => eprintln!("Could not determine home directory"),
        }
        return;
    }

    if reset {
        let Some(p) = &config_path else {
            eprintln!("Could not determine home directory");
            return;
        };
        if let Some(parent) = p.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Failed to create {}: {e}", parent.display());
                return;
            }
        }
        match std::fs::write(p, Config::default().to_toml()) {
            Ok(()) => println!("Config reset: {}", p.display()),
            Err(e) => eprintln!("Failed to write {}: {e}", p.display()),
        }
        return;
    }

    if show {
        // Effective config after file + env resolution
        print!("{}", Config::load().to_toml());
        return;
    }

    eprintln!("Use `runbook config --show`, `--reset`, or `--path`");
}
