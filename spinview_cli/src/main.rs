mod commands;
mod output;
mod progress;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spinview_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "spinview")]
#[command(about = "Browse 360° product spins from the SpinView API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and search 360° spins
    Spins(commands::spins::SpinsArgs),
    /// Show a single spin and its frame set
    Spin(commands::spin::SpinArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spinview=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = match std::env::var("SPINVIEW_BASE_URL") {
        Ok(base_url) => Client::with_base_url(&base_url),
        Err(_) => Client::new(),
    };

    match &cli.command {
        Commands::Spins(args) => commands::spins::run(args, &client, &format).await?,
        Commands::Spin(args) => commands::spin::run(args, &client, &format).await?,
    }

    Ok(())
}
