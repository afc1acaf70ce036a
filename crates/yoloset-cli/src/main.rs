//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `AppCore`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use yoloset_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "yoloset=debug,tower_http=debug"
    } else {
        "yoloset=info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Web { host, port } => handlers::web::execute(&config, &host, port).await,
        Commands::Paths => handlers::paths::execute(&config),
        Commands::Create { name } => {
            let ctx = bootstrap(&config)?;
            handlers::create::execute(&ctx, &name).await
        }
        Commands::List => {
            let ctx = bootstrap(&config)?;
            handlers::list::execute(&ctx).await
        }
        Commands::Browse {
            name,
            page,
            annotated,
        } => {
            let ctx = bootstrap(&config)?;
            handlers::browse::execute(&ctx, &name, annotated, page.as_deref()).await
        }
        Commands::Verify { name } => {
            let ctx = bootstrap(&config)?;
            handlers::verify::execute(&ctx, &name).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
