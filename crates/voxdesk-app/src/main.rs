//! # voxdesk
//!
//! Command-line front end for the speech gateway.

mod config;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, Command, GatewayArgs};
use state::Session;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration is read once, so .env has to be loaded before parsing.
    dotenvy::dotenv().ok();

    // Initialize logging; stdout carries command output only
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voxdesk=info,voxdesk_client=info,voxdesk_store=info".into()),
        )
        .init();

    debug!("Starting voxdesk v{}", env!("CARGO_PKG_VERSION"));
    execute(Cli::parse()).await
}

async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Services => {
            let mut session = open_session(&cli.gateway)?;
            for service in session.load().await.iter() {
                println!("{service}");
            }
        }
        Command::Speak {
            text,
            voice,
            encoding,
            download,
        } => {
            let mut session = open_session(&cli.gateway)?;
            let services = session.load().await;
            debug!("{} services enabled", services.len());

            session.request.text = text;
            session.request.voice = voice;
            session.request.encoding = encoding;

            let audio = session.run().await.context("Speech synthesis failed")?;
            println!("{audio}");

            if let Some(dest) = download {
                let saved = session
                    .download(&dest)
                    .with_context(|| format!("Failed to save audio to {}", dest.display()))?;
                println!("{}", saved.display());
            }
        }
        Command::Clear => {
            let removed = cli.gateway.store()?.clear()?;
            println!("Removed {removed} clips");
        }
    }

    Ok(())
}

/// Build the gateway client and object store for commands that talk to the gateway.
fn open_session(gateway: &GatewayArgs) -> Result<Session> {
    let client = gateway.client()?;
    info!(
        "Using gateway {} with {} auth",
        client.api_base(),
        client.auth_mode()
    );
    Ok(Session::new(client, gateway.store()?))
}
