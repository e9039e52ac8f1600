//! Identity providers for bearer-token auth.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use voxdesk_core::{Error, Result};

/// Externally managed source of identity tokens.
///
/// Asked once per synthesis call. `Ok(None)` means no signed-in identity;
/// the call then goes out without an `Authorization` header.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn id_token(&self) -> Result<Option<String>>;
}

/// Provider with no identity at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIdentity;

#[async_trait]
impl IdentityProvider for NoIdentity {
    async fn id_token(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Fixed token, e.g. from an environment variable.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

#[async_trait]
impl IdentityProvider for StaticToken {
    async fn id_token(&self) -> Result<Option<String>> {
        let token = self.0.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }
}

/// Token kept in a file that another process refreshes.
///
/// The file is re-read on every call so rotated tokens are picked up.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl IdentityProvider for TokenFile {
    async fn id_token(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Token file {} not found", self.path.display());
                Ok(None)
            }
            Err(e) => Err(Error::Identity(format!(
                "Failed to read token file {}: {e}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_identity() {
        assert_eq!(NoIdentity.id_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_static_token() {
        assert_eq!(
            StaticToken::new("abc\n").id_token().await.unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(StaticToken::new("  ").id_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_token_file_rereads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id_token");
        let provider = TokenFile::new(&path);

        assert_eq!(provider.id_token().await.unwrap(), None);

        std::fs::write(&path, "first\n").unwrap();
        assert_eq!(provider.id_token().await.unwrap(), Some("first".to_string()));

        std::fs::write(&path, "second").unwrap();
        assert_eq!(provider.id_token().await.unwrap(), Some("second".to_string()));

        std::fs::write(&path, "").unwrap();
        assert_eq!(provider.id_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_token_file_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a string.
        let provider = TokenFile::new(dir.path());
        assert!(matches!(
            provider.id_token().await,
            Err(Error::Identity(_))
        ));
    }
}
