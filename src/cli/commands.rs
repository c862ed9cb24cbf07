//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::MenuSource;
use crate::cli::args::{Cli, Commands, ConfigCommands, MenuCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::assets::{piece_images, IMAGE_CREDIT};
use crate::domain::{resolve, resolve_labels, InitialTime, MenuPath, Node, TimeControl};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let command = match &cli.command {
        Some(command) => command,
        None => {
            return Err(CliError::Usage(
                "no command given, see --help".to_string(),
            ))
        }
    };

    // completions need neither settings nor a menu
    if let Commands::Completion { shell } = command {
        print_completions(*shell);
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let source = match &cli.menu {
        Some(path) => MenuSource::File(path.clone()),
        None => settings.menu_source(),
    };
    debug!(?source, "menu source");

    match command {
        Commands::Menu { command } => match command {
            MenuCommands::Tree => _menu_tree(&source),
            MenuCommands::Show { path } => _menu_show(&source, path),
            MenuCommands::Leaf { path } => _menu_leaf(&source, path),
        },
        Commands::Tc { tag } => {
            _tc(tag.as_deref().unwrap_or(&settings.default_time_control))
        }
        Commands::Credits => _credits(),
        Commands::Config { command } => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Path => _config_path(cli.config.as_deref()),
        },
        Commands::Completion { .. } => Ok(()),
    }
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[instrument]
fn _menu_tree(source: &MenuSource) -> CliResult<()> {
    let tree = source.load()?;
    output::info(&tree.to_tree_string("menu"));
    Ok(())
}

#[instrument]
fn _menu_show(source: &MenuSource, path: &str) -> CliResult<()> {
    let path: MenuPath = path.parse()?;
    let tree = source.load()?;
    let node = resolve(&tree, &path)?;
    let labels = resolve_labels(&tree, &path)?;

    output::header(&format!(
        "/{} ({})",
        labels.iter().join(" / "),
        if path.is_empty() { "root".to_string() } else { path.to_string() }
    ));
    match node {
        Node::Leaf(value) => output::action("value", value),
        Node::Branch(branch) => {
            for (i, (label, child)) in branch.iter().enumerate() {
                let marker = if child.is_leaf() { "" } else { " >" };
                output::detail(&format!("{} {}{}", i, label, marker));
            }
        }
    }
    Ok(())
}

#[instrument]
fn _menu_leaf(source: &MenuSource, path: &str) -> CliResult<()> {
    let path: MenuPath = path.parse()?;
    let tree = source.load()?;
    let node = resolve(&tree, &path)?;
    output::info(&node.is_leaf());
    Ok(())
}

#[instrument]
fn _tc(tag: &str) -> CliResult<()> {
    let tc: TimeControl = tag.parse()?;
    output::header(&tc);
    for (i, period) in tc.periods().iter().enumerate() {
        let initial = match period.initial {
            InitialTime::Unlimited => "unlimited".to_string(),
            InitialTime::Seconds(s) => format!("{}s", s),
        };
        let moves = if period.is_sudden_death() {
            "rest of game".to_string()
        } else {
            format!("{} moves", period.moves_required)
        };
        output::detail(&format!(
            "period {}: {} +{}s/move, {}",
            i + 1,
            initial,
            period.increment,
            moves
        ));
    }
    Ok(())
}

fn _credits() -> CliResult<()> {
    output::header(&IMAGE_CREDIT.content);
    output::detail(&format!("author: {}", IMAGE_CREDIT.user));
    output::detail(&format!(
        "license: CC {} {} ({})",
        IMAGE_CREDIT.license, IMAGE_CREDIT.version, IMAGE_CREDIT.lang
    ));
    for (file, id) in piece_images() {
        output::detail(&format!("{} {}", file, id));
    }
    Ok(())
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path(local: Option<&Path>) -> CliResult<()> {
    match global_config_path() {
        Some(p) => output::action("global", &p.display()),
        None => output::action("global", "unavailable"),
    }
    if let Some(p) = local {
        output::action("local", &p.display());
    }
    Ok(())
}
