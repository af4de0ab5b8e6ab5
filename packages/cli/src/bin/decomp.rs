use clap::{Parser, Subcommand};
use colored::*;
use decomp_settings::EnvColorScheme;
use std::path::PathBuf;
use std::process;

mod cli;

use cli::credits::{handle_credits_command, CreditsCommands};
use cli::settings::{handle_settings_command, SettingsCommands};

#[derive(Parser)]
#[command(name = "decomp")]
#[command(about = "decomp.me site tooling - settings and credits")]
#[command(version)]
struct Cli {
    /// Settings database (default: DECOMP_SETTINGS_DB or ~/.decomp/settings.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the credits page
    #[command(subcommand)]
    Credits(CreditsCommands),
    /// Manage persisted settings
    #[command(subcommand)]
    Settings(SettingsCommands),
    /// Print whether the effective site theme is dark
    Theme,
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    decomp_cli::logging::init_tracing(cli.verbose);

    if let Err(e) = handle_command(cli.command, cli.db).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands, db: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Credits(command) => handle_credits_command(command).await,
        Commands::Settings(command) => {
            let store = decomp_cli::open_settings(db).await?;
            handle_settings_command(&store, command).await
        }
        Commands::Theme => {
            let store = decomp_cli::open_settings(db).await?;
            let theme = store.theme().get().await?;
            let dark = store.is_site_theme_dark(&EnvColorScheme).await?;
            println!("{} (theme: {})", if dark { "dark" } else { "light" }, theme);
            Ok(())
        }
    }
}
