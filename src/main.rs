// ABOUTME: Entry point for the hostconfig CLI application.
// ABOUTME: Parses arguments and dispatches to the subcommand handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use hostconfig::error::Result;
use hostconfig::{Bind, HostConfig, RestartPolicy};
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Normalize { path, restart } => normalize(path.as_deref(), restart),
        Commands::Bind {
            to,
            from,
            read_only,
        } => {
            let bind = match from {
                Some(from) => Bind::to(to).from(from).read_only(read_only).build(),
                None => Bind::to(to).build(),
            };
            println!("{bind}");
            Ok(())
        }
        Commands::AppendBinds { path, binds } => append_binds(&path, binds),
    }
}

fn normalize(path: Option<&Path>, restart: Option<RestartPolicy>) -> Result<()> {
    let config = match path {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::discover(&current_dir()?)?,
    };

    let config = match restart {
        Some(policy) => config.to_builder().restart_policy(policy).build(),
        None => config,
    };

    println!("{}", config.to_json_pretty()?);
    Ok(())
}

fn append_binds(path: &Path, binds: Vec<String>) -> Result<()> {
    let config = HostConfig::load(path)?.to_builder().append_binds(binds).build();
    tracing::debug!(binds = ?config.binds(), "appended binds");
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

fn current_dir() -> Result<PathBuf> {
    Ok(env::current_dir()?)
}
