// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use hostconfig::RestartPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hostconfig")]
#[command(about = "Inspect and assemble container host configs")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a host config file as engine JSON
    Normalize {
        /// Config file (.json, .yml, .yaml); discovered in the current directory if omitted
        path: Option<PathBuf>,

        /// Override the restart policy (always, unless-stopped, on-failure[:N])
        #[arg(long)]
        restart: Option<RestartPolicy>,
    },

    /// Format a bind mount string
    Bind {
        /// Path inside the container
        #[arg(long)]
        to: String,

        /// Host path or volume name
        #[arg(long)]
        from: Option<String>,

        /// Mount read-only
        #[arg(long)]
        read_only: bool,
    },

    /// Append binds to a host config file and print the result as engine JSON
    AppendBinds {
        /// Config file (.json, .yml, .yaml)
        path: PathBuf,

        /// Binds to append, in src:dest[:ro] form
        #[arg(required = true)]
        binds: Vec<String>,
    },
}
