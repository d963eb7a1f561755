mod cmd;
mod output;
mod root;

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use cmd::init::{InitMode, InitOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "viflo",
    about = "Merge viflo instructions, settings, and planning stubs into a project",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Directory containing .agent/skills/ (default: the viflo installation)
    #[arg(long, global = true, value_name = "DIR")]
    skills_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write or merge CLAUDE.md, .claude/settings.json and (with --full) .planning/ stubs
    #[command(group(ArgGroup::new("mode").required(true).args(["minimal", "full"])))]
    Init {
        /// CLAUDE.md sentinel block and settings only
        #[arg(long)]
        minimal: bool,

        /// Also write the starter CLAUDE.md template and .planning/ scaffold
        #[arg(long)]
        full: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long)]
        dry_run: bool,

        /// Target project directory (default: current directory)
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        // Usage errors exit 1; --help and --version keep clap's own handling.
        if e.use_stderr() {
            let _ = e.print();
            std::process::exit(1);
        }
        e.exit()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init {
            minimal: _,
            full,
            dry_run,
            path,
        } => run_init(full, dry_run, cli.json, cli.skills_root, path),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run_init(
    full: bool,
    dry_run: bool,
    json: bool,
    skills_root: Option<PathBuf>,
    path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let target = root::resolve_target(&cwd, path.as_deref())?;
    let skills_root = skills_root
        .as_deref()
        .map(|p| root::resolve_target(&cwd, Some(p)))
        .transpose()?;

    let opts = InitOptions {
        mode: if full { InitMode::Full } else { InitMode::Minimal },
        dry_run,
        json,
        skills_root,
    };
    cmd::init::run(&target, &opts)
}
