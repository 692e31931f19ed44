use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bookrake::app::AppContext;
use bookrake::cli::{commands, Cli, Commands};
use bookrake::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Scrape => {
            commands::scrape(&ctx).await?;
        }
        Commands::Render => {
            commands::render(&ctx)?;
        }
        Commands::Publish => {
            commands::publish(&ctx).await?;
        }
        Commands::Run => {
            commands::run(&ctx).await?;
        }
    }

    Ok(())
}
