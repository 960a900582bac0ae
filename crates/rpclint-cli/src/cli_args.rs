use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rpclint", version, about = "JSON-RPC binding checks for Smithy models")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log engine activity to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Validate one or more JSON AST model files as a single model
    Validate {
        /// Model files (Smithy JSON AST)
        #[arg(required = true)]
        models: Vec<PathBuf>,
        /// Config file (default: ./rpclint.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Suppress a rule code, e.g. J004 (repeatable)
        #[arg(long)]
        suppress: Vec<String>,
        /// Skip a rule entirely (repeatable)
        #[arg(long)]
        disable: Vec<String>,
        /// Evaluate rules on the current thread
        #[arg(long)]
        sequential: bool,
    },

    /// List rules and whether the config enables them
    Rules {
        /// Config file (default: ./rpclint.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
