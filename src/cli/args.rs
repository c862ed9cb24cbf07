//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Menu tree addressing and PGN-style time control parsing for a chess UI
#[derive(Parser, Debug)]
#[command(name = "chessmenu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// TOML menu file used instead of the configured menu
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub menu: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Navigate the settings menu
    Menu {
        #[command(subcommand)]
        command: MenuCommands,
    },

    /// Parse a time control tag
    Tc {
        /// Tag such as `40/7200:1800` (default: configured tag)
        tag: Option<String>,
    },

    /// Show piece image credits
    Credits,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum MenuCommands {
    /// Print the whole menu
    Tree,

    /// Show the node at a path
    Show {
        /// Selectors, e.g. `362` or `3 6 2` (empty for the root)
        #[arg(default_value = "")]
        path: String,
    },

    /// Tell whether a path ends in a setting
    Leaf {
        /// Selectors, e.g. `35`
        path: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
