//! One front-end session: the service list, the form fields, and the current audio.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use voxdesk_client::GatewayClient;
use voxdesk_core::{Error, Result, ServiceList, SynthesisRequest};
use voxdesk_store::{ObjectStore, ObjectUrl};

/// Session state. Lives as long as one front-end run and is never persisted.
pub struct Session {
    client: GatewayClient,
    store: ObjectStore,
    /// Enabled services, as loaded on start.
    pub services: ServiceList,
    /// Current form fields.
    pub request: SynthesisRequest,
    /// Audio from the most recent synthesis.
    audio: Option<ObjectUrl>,
}

impl Session {
    pub fn new(client: GatewayClient, store: ObjectStore) -> Self {
        Self {
            client,
            store,
            services: ServiceList::empty(),
            request: SynthesisRequest::default(),
            audio: None,
        }
    }

    /// Load the service directory. Failures leave the list empty.
    pub async fn load(&mut self) -> &ServiceList {
        self.services = self.client.load_services().await;
        &self.services
    }

    /// Synthesize the current request and make it the session's audio.
    ///
    /// The previous clip's URL is revoked once the new one is stored.
    pub async fn run(&mut self) -> Result<&ObjectUrl> {
        let clip = self.client.synthesize(&self.request).await?;
        let object = self.store.put(&clip)?;

        if let Some(previous) = self.audio.take() {
            if let Err(e) = self.store.revoke(&previous) {
                warn!("Failed to release {previous}: {e}");
            }
        }

        let current = self.audio.insert(object);
        info!("Audio ready at {current}");
        Ok(current)
    }

    /// URL of the current audio, if any synthesis has completed.
    pub const fn audio(&self) -> Option<&ObjectUrl> {
        self.audio.as_ref()
    }

    /// Save the current audio to `dest`.
    pub fn download(&self, dest: &Path) -> Result<PathBuf> {
        let object = self
            .audio
            .as_ref()
            .ok_or_else(|| Error::InvalidArgument("no audio to download yet".to_string()))?;
        self.store.export(object, dest)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use voxdesk_client::{ClientConfig, StaticToken};
    use voxdesk_core::AuthMode;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn gateway() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apis"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"services": ["texttospeech.googleapis.com", "storage.googleapis.com"]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/tts/synthesize"))
            .and(header("authorization", "Bearer abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/mpeg")
                    .set_body_bytes(vec![0xFF, 0xFB, 0x90, 0x64]),
            )
            .mount(&server)
            .await;
        server
    }

    fn session(server: &MockServer, store_dir: &Path) -> Session {
        let client = GatewayClient::with_identity(
            ClientConfig::new(server.uri()).with_auth_mode(AuthMode::Bearer),
            Arc::new(StaticToken::new("abc")),
        )
        .unwrap();
        Session::new(client, ObjectStore::with_path(store_dir).unwrap())
    }

    #[tokio::test]
    async fn test_load_and_run() {
        let server = gateway().await;
        let tmp = tempfile::tempdir().unwrap();
        let mut session = session(&server, tmp.path());

        let services = session.load().await;
        assert_eq!(
            services.iter().collect::<Vec<_>>(),
            vec!["texttospeech.googleapis.com", "storage.googleapis.com"]
        );

        session.request = SynthesisRequest::new("hello");
        let url = session.run().await.unwrap().clone();
        assert_eq!(url.url.scheme(), "file");
        assert!(url.path.exists());
        assert_eq!(session.audio(), Some(&url));
    }

    #[tokio::test]
    async fn test_rerun_revokes_previous_audio() {
        let server = gateway().await;
        let tmp = tempfile::tempdir().unwrap();
        let mut session = session(&server, tmp.path());

        session.request = SynthesisRequest::new("one");
        let first = session.run().await.unwrap().clone();
        session.request = SynthesisRequest::new("two");
        let second = session.run().await.unwrap().clone();

        assert!(!first.path.exists());
        assert!(second.path.exists());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_download() {
        let server = gateway().await;
        let tmp = tempfile::tempdir().unwrap();
        let store_dir = tmp.path().join("store");
        let mut session = session(&server, &store_dir);

        assert!(session.download(tmp.path()).is_err());

        session.request = SynthesisRequest::new("hello");
        session.run().await.unwrap();
        let saved = session.download(tmp.path()).unwrap();
        assert_eq!(saved, tmp.path().join("tts.mp3"));
        assert_eq!(std::fs::read(saved).unwrap(), vec![0xFF, 0xFB, 0x90, 0x64]);
    }

    #[tokio::test]
    async fn test_failed_run_keeps_previous_audio() {
        let server = gateway().await;
        let tmp = tempfile::tempdir().unwrap();
        let mut session = session(&server, tmp.path());

        session.request = SynthesisRequest::new("hello");
        let first = session.run().await.unwrap().clone();

        server.reset().await;
        assert!(session.run().await.is_err());
        assert_eq!(session.audio(), Some(&first));
        assert!(first.path.exists());
    }
}
