//! Hostboard CLI - property listing onboarding from the terminal

use clap::Parser;
use hostboard::cli::{Cli, Commands};
use hostboard::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    if matches!(cli.command, Some(Commands::Tui)) {
        // Keep the alternate screen clean
        tracing_subscriber::registry()
            .with(EnvFilter::new("warn"))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> hostboard::Result<()> {
    match cli.command {
        Some(Commands::Tui) => hostboard::cli::commands::tui::run(cli.cwd.as_deref()).await,
        Some(Commands::Demo { json }) => {
            hostboard::cli::commands::demo::run(cli.cwd.as_deref(), json).await
        }
        Some(Commands::Config) => hostboard::cli::commands::config::run(cli.cwd.as_deref()).await,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
