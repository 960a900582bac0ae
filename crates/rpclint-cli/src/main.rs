//! rpclint CLI: validates JSON-RPC bindings in Smithy JSON AST models.
//!
//! See `rpclint --help` for usage.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "RPCLINT_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter: Box<dyn rpclint_output::OutputFormatter> = if cli.json {
        Box::new(rpclint_output::json::JsonFormatter)
    } else {
        Box::new(rpclint_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Validate {
            models,
            config,
            suppress,
            disable,
            sequential,
        } => commands::validate::run(
            &*formatter,
            commands::validate::ValidateArgs {
                models,
                config,
                suppress,
                disable,
                sequential,
            },
        ),
        Commands::Rules { config } => commands::rules::run(&*formatter, config),
    };

    std::process::exit(exit_code);
}
