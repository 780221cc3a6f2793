use clap::Parser;
use colored::*;
use portfolio_server::catalog::{default_profile, ProjectCatalog};
use portfolio_server::cli::Cli;
use portfolio_server::contact::ContactService;
use portfolio_server::error::{PortfolioError, Result};
use portfolio_server::github::GitHubClient;
use portfolio_server::server::{start_server, AppState};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Portfolio Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let catalog = Arc::new(ProjectCatalog::default_catalog()?);
    println!("✅ Loaded {} featured projects", catalog.len());

    let github = GitHubClient::with_base_url(&cli.github_api_url)?;
    println!(
        "📡 Listing repositories of {} (home: {}, current: {})",
        cli.github_account.cyan(),
        cli.home_page_size,
        cli.current_page_size
    );

    let relay = cli.contact_relay();
    if relay.is_enabled() {
        println!("✉️  Contact form relays through EmailJS");
    } else {
        println!("{}", "Contact relay not configured, messages are only acknowledged".yellow());
    }

    let state = AppState {
        catalog,
        profile: Arc::new(default_profile()),
        github,
        contact: Arc::new(ContactService::new(relay)?),
        feeds: cli.feed_settings(),
        start_time: Instant::now(),
    };

    println!("\nPress Ctrl+C to stop the server\n");

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n🛑 Shutting down server...");
        }
    };

    start_server(state, &cli.bind_addr(), shutdown)
        .await
        .map_err(|e| PortfolioError::IoError(std::io::Error::other(e.to_string())))?;

    println!("✅ Server stopped");
    Ok(())
}
