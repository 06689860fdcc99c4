//! vue-scaffold CLI - Module and component scaffolding for Vue projects

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use scaffold_core::tui::CreateArgs;
use scaffold_core::{ProductConfig, UnitKind};
use std::path::PathBuf;

/// vue-scaffold product configuration
#[derive(Clone)]
pub struct VueConfig;

impl ProductConfig for VueConfig {
    fn name(&self) -> &'static str {
        "vue-scaffold"
    }

    fn display_name(&self) -> &'static str {
        "Vue scaffold"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Vue modules and components"
    }

    fn root_env(&self) -> &'static str {
        "VUE_SCAFFOLD_ROOT"
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a module in src/modules
    #[command(alias = "create-module")]
    Module(CliCreateArgs),
    /// Create a component in src/components
    #[command(alias = "create-component")]
    Component(CliCreateArgs),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct CliCreateArgs {
    /// Project root (defaults to $VUE_SCAFFOLD_ROOT, then the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Unit name; skips the name prompt
    #[arg(short, long)]
    pub name: Option<String>,

    /// Print plain lines instead of interactive output
    #[arg(long)]
    pub plain: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            root: args.root,
            name: args.name,
            plain: args.plain,
        }
    }
}

/// Command line definition named and described by the product config
fn cli<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command()
        .name(config.name())
        .bin_name(config.name())
        .about(config.cli_description())
}

fn parse_args<C: ProductConfig>(config: &C) -> Args {
    let matches = cli(config).get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = VueConfig;
    let args = parse_args(&config);

    let (kind, create_args) = match args.command {
        Some(Command::Module(create_args)) => (Some(UnitKind::Modules), create_args),
        Some(Command::Component(create_args)) => (Some(UnitKind::Components), create_args),
        // No subcommand provided, ask which kind to create
        None => (None, args.create),
    };

    let outcome = scaffold_core::run(&config, kind, create_args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if !outcome?.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
