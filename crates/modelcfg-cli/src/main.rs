mod render;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use modelcfg_app::AGENT_DIR_ENV;
use modelcfg_providers::{Catalog, ProcessEnv, ResolveContext, resolve_implicit_providers};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modelcfg")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Agent directory holding the provider profile (models.json).
    #[arg(long, global = true, env = AGENT_DIR_ENV)]
    agent_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Subcommand)]
enum Command {
    /// Show providers enabled by the environment and agent profile (default).
    Providers {
        /// Print the resolved providers as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List every known provider and its models.
    Catalog,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Providers { json: false });

    let mut stdout = io::stdout().lock();
    match command {
        Command::Catalog => render::write_catalog(&mut stdout, &Catalog::builtin())?,
        Command::Providers { json } => {
            let agent_dir = modelcfg_app::agent_dir(cli.agent_dir.as_deref())?;
            list_providers(&agent_dir, json, &mut stdout).await?;
        }
    }

    Ok(())
}

/// Resolve against `agent_dir` and print the result. Never writes to the
/// agent directory.
async fn list_providers(
    agent_dir: &Path,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(agent_dir = %agent_dir.display(), "Resolving implicit providers");

    let context = ResolveContext::new(agent_dir);
    let providers = resolve_implicit_providers(&context, &ProcessEnv).await?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &providers)?;
        writeln!(out)?;
    } else {
        render::write_providers(out, &providers)?;
    }
    Ok(())
}
