//! CLI administration tool for blurb.
//!
//! Short keys depend only on the long URL, so they can be computed without a
//! running server. This tool does that, and checks the service configuration.
//!
//! # Usage
//!
//! ```bash
//! # Derive short keys for one or more URLs
//! cargo run --bin admin -- key https://github.com/cheerioskun/constellation
//!
//! # Use a different public address for the printed short URLs
//! cargo run --bin admin -- key --base-url https://s.example.com https://example.com
//!
//! # Validate configuration from .env / environment
//! cargo run --bin admin -- config check
//! ```

use blurb::config::{self, Config};
use blurb::utils::extract_domain::extract_domain;
use blurb::utils::key_deriver::{derive_key, short_url};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for blurb.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Derive short keys and short URLs offline
    Key {
        /// Long URLs to derive keys for
        #[arg(required = true)]
        urls: Vec<String>,

        /// Public base address (defaults to BASE_URL from the environment)
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration, then print it
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Key { urls, base_url } => handle_key(urls, base_url),
        Commands::Config { action } => handle_config_action(action),
    }
}

/// Prints the short key and short URL for each long URL.
///
/// # Output Format
///
/// ```text
/// 🔑 Short keys (base: http://localhost:3000)
///
///   https://github.com/cheerioskun/constellation
///     key:    Xk2a9_fQ1b
///     short:  http://localhost:3000/long/Xk2a9_fQ1b
///     domain: github.com
/// ```
///
/// URLs the server would reject are reported and make the command fail after
/// all URLs have been processed.
fn handle_key(urls: Vec<String>, base_url: Option<String>) -> Result<()> {
    let base_url = match base_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => Config::from_env()?.base_url,
    };

    println!(
        "{} {}",
        "🔑 Short keys".bright_blue().bold(),
        format!("(base: {base_url})").bright_black()
    );
    println!();

    let mut failed = 0;

    for url in &urls {
        println!("  {}", url.bright_white());

        match extract_domain(url) {
            Ok(domain) => {
                let key = derive_key(url);
                println!("    key:    {}", key.as_str().bright_yellow().bold());
                println!("    short:  {}", short_url(&base_url, &key).cyan());
                println!("    domain: {}", domain.bright_black());
            }
            Err(e) => {
                failed += 1;
                println!("    {}", format!("❌ {e}").red());
            }
        }
    }

    println!();

    if failed > 0 {
        anyhow::bail!("{failed} of {} URLs were rejected", urls.len());
    }

    Ok(())
}

/// Handles configuration commands.
fn handle_config_action(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Check => {
            println!("{}", "🔍 Checking configuration...".bright_blue());

            let config = config::load_from_env().context("Configuration is invalid")?;

            println!("{}", "✅ Configuration OK".green().bold());
            println!();
            println!("  Listen address:       {}", config.listen_addr.bright_white());
            println!("  Base URL:             {}", config.base_url.bright_white());
            println!("  Log level:            {}", config.log_level.bright_white());
            println!("  Log format:           {}", config.log_format.bright_white());
            println!(
                "  Tally queue capacity: {}",
                config.tally_queue_capacity.to_string().bright_white()
            );
            println!();
        }
    }

    Ok(())
}
