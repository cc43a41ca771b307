//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, wires the annotation client via
//! bootstrap and dispatches to the command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use synext_cli::commands::mode_from_flag;
use synext_cli::{Cli, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(cli.client_config())?;

    match command {
        Commands::Annotate {
            text,
            sentence,
            json,
        } => {
            handlers::annotate::execute(&ctx, &text.join(" "), mode_from_flag(*sentence), *json)
                .await?;
        }
        Commands::Repl { sentence } => {
            handlers::repl::execute(&ctx, mode_from_flag(*sentence)).await?;
        }
        Commands::Web {
            host,
            port,
            allow_origin,
        } => {
            handlers::web::execute(&ctx, host.clone(), *port, allow_origin.clone()).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        eprintln!("Error: {err:#}");
        std::process::exit(code);
    }
}
