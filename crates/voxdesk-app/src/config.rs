//! Command-line and environment configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use voxdesk_client::{
    ClientConfig, GatewayClient, IdentityProvider, NoIdentity, StaticToken, TokenFile,
};
use voxdesk_core::{AuthMode, Error, Result};
use voxdesk_store::ObjectStore;

#[derive(Parser, Debug)]
#[command(name = "voxdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Speech gateway client: list enabled services and synthesize speech")]
pub struct Cli {
    #[command(flatten)]
    pub gateway: GatewayArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings read once at start-up.
#[derive(Args, Debug, Clone)]
pub struct GatewayArgs {
    /// Base URL of the speech gateway
    #[arg(long, env = "VOXDESK_API_BASE", global = true, default_value = "")]
    pub api_base: String,

    /// Auth mode: `hmac` for signed requests, anything else for bearer tokens
    #[arg(long, env = "VOXDESK_AUTH_MODE", global = true)]
    pub auth_mode: Option<String>,

    /// Bearer token to send in bearer mode
    #[arg(long, env = "VOXDESK_ID_TOKEN", global = true, hide_env_values = true)]
    pub id_token: Option<String>,

    /// File holding a bearer token, re-read on every call
    #[arg(long, env = "VOXDESK_ID_TOKEN_FILE", global = true, conflicts_with = "id_token")]
    pub id_token_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "VOXDESK_TIMEOUT_SECS", global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Directory for synthesized audio (defaults to the user cache directory)
    #[arg(long, env = "VOXDESK_STORE_DIR", global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the services enabled on the gateway
    Services,

    /// Synthesize speech and print a local URL for the audio
    Speak {
        /// Text to speak
        text: String,

        /// Voice identifier
        #[arg(long, default_value = voxdesk_core::types::synthesis::DEFAULT_VOICE)]
        voice: String,

        /// Audio encoding identifier
        #[arg(long, default_value = voxdesk_core::types::synthesis::DEFAULT_ENCODING)]
        encoding: String,

        /// Also save the audio here (a directory or file path, `tts.mp3` if
        /// omitted). Takes the next word as PATH, so put it after TEXT.
        #[arg(long, num_args = 0..=1, default_missing_value = "tts.mp3", value_name = "PATH")]
        download: Option<PathBuf>,
    },

    /// Delete all stored audio
    Clear,
}

impl GatewayArgs {
    pub fn auth_mode(&self) -> AuthMode {
        AuthMode::from_selector(self.auth_mode.as_deref())
    }

    pub fn identity(&self) -> Arc<dyn IdentityProvider> {
        if let Some(path) = &self.id_token_file {
            Arc::new(TokenFile::new(path))
        } else if let Some(token) = &self.id_token {
            Arc::new(StaticToken::new(token))
        } else {
            Arc::new(NoIdentity)
        }
    }

    pub fn client(&self) -> Result<GatewayClient> {
        if self.api_base.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "no gateway URL, set --api-base or VOXDESK_API_BASE".to_string(),
            ));
        }

        let config = ClientConfig::new(&self.api_base)
            .with_auth_mode(self.auth_mode())
            .with_timeout(Duration::from_secs(self.timeout_secs));

        GatewayClient::with_identity(config, self.identity())
    }

    pub fn store(&self) -> Result<ObjectStore> {
        match &self.store_dir {
            Some(dir) => ObjectStore::with_path(dir),
            None => ObjectStore::new(),
        }
    }
}
