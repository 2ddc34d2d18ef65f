// Copyright (c) 2025 CathoLink. All rights reserved.

mod auth;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod quotes;
mod router;
mod session;
mod ui;
mod workers;

use crate::auth::{Authenticator, PortalClient};
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the student portal dashboard
    Start {
        /// Start with the dark palette regardless of the ambient default.
        #[arg(long)]
        dark: bool,
    },
    /// Validate a session token and save it for later runs.
    Login {
        /// Session token issued by the web portal.
        #[arg(long, value_name = "SESSION_TOKEN")]
        session_token: String,
    },
    /// Clear the saved session and logout.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("CATHOLINK_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start { dark } => {
            let env_dark = std::env::var("CATHOLINK_THEME")
                .map(|v| v.eq_ignore_ascii_case("dark"))
                .unwrap_or(false);
            ui::theme::init_ambient(dark || env_dark);

            // A missing or unreadable config starts an unauthenticated
            // session; the profile loader will report the failure.
            let config = if config_path.exists() {
                Config::load_from_file(&config_path).ok()
            } else {
                None
            };
            let session = session::setup_session(config, environment).await?;
            session::run_tui_mode(session).await
        }
        Command::Login { session_token } => {
            println!(
                "Validating session against the {} portal...",
                environment
            );
            let client = PortalClient::new(environment, Some(session_token.clone()));
            match client.fetch_profile().await {
                Ok(profile) => {
                    println!(
                        "Signed in as {} (Section: {})",
                        profile.name, profile.section
                    );
                    let config = Config::new(session_token);
                    config
                        .save(&config_path)
                        .map_err(|e| format!("Failed to save config: {}", e))?;
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Failed to validate session: {}", e);
                    Err(e.into())
                }
            }
        }
        Command::Logout => {
            println!("Logging out and clearing the saved session...");
            Config::clear_session(&config_path).map_err(Into::into)
        }
    }
}
