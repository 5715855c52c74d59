//! treelens - explore a belief-state search tree from the terminal.
//!
//! Builds a seeded synthetic tree and opens the debugging prompt on its
//! root, or runs the commands given with `--exec` and exits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use treelens::{Outcome, Repl, Session, SyntheticTreeConfig, generate};
use treelens_core::{DebuggerConfig, TreeDebugger};

#[derive(Parser, Debug)]
#[command(name = "treelens")]
#[command(about = "Interactive explorer for belief-state search trees")]
struct Cli {
    /// YAML debugger config; the bundled defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Actions per decision node
    #[arg(long, default_value_t = 3)]
    actions: usize,

    /// Observations per action
    #[arg(long, default_value_t = 2)]
    observations: usize,

    /// Decision layers below the root
    #[arg(long, default_value_t = 3)]
    depth: usize,

    #[arg(long, default_value_t = 200)]
    simulations: u64,

    /// Disable terminal colors
    #[arg(long)]
    no_color: bool,

    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Run these commands in order and exit instead of prompting
    #[arg(long = "exec", short = 'e')]
    commands: Vec<String>,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<DebuggerConfig> {
    let mut config = match &cli.config {
        Some(path) => DebuggerConfig::from_yaml_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DebuggerConfig::from_default_yaml()?,
    };
    if cli.no_color {
        config.color = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load_config(&cli)?;
    if !config.color {
        colored::control::set_override(false);
    }

    let shape = SyntheticTreeConfig {
        seed: cli.seed,
        actions: cli.actions,
        observations: cli.observations,
        depth: cli.depth,
        simulations: cli.simulations,
    };
    let tree = generate(&shape)?;
    info!(nodes = tree.node_count(), seed = shape.seed, "generated tree");

    let debugger = TreeDebugger::with_config(tree.root(), &config);

    if cli.commands.is_empty() {
        Repl::new(debugger, config)?.run()?;
        return Ok(());
    }

    let mut session = Session::new(debugger, config);
    for line in &cli.commands {
        match session.handle_line(line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Output(output)) => println!("{output}"),
            Err(e) => anyhow::bail!("'{line}': {e}"),
        }
    }
    Ok(())
}
