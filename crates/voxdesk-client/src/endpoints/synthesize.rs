//! Speech synthesis endpoint.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::{debug, info};
use voxdesk_core::{AudioClip, AuthContext, Error, Result, SynthesisRequest};

use crate::{auth::apply_auth, endpoints::SYNTHESIZE_PATH, GatewayClient};

impl GatewayClient {
    /// Synthesize speech for `request`.
    ///
    /// Auth material is built first (see [`GatewayClient::authorize`]); the
    /// synthesis call only starts once it is available.
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioClip> {
        let auth = self.authorize(SYNTHESIZE_PATH, &Method::POST).await?;
        self.synthesize_with(request, &auth).await
    }

    /// Synthesize speech with auth material the caller already holds.
    pub async fn synthesize_with(
        &self,
        request: &SynthesisRequest,
        auth: &AuthContext,
    ) -> Result<AudioClip> {
        debug!(
            "Synthesizing {} chars with voice={} encoding={} auth={:?}",
            request.text.chars().count(),
            request.voice,
            request.encoding,
            auth.mode()
        );

        let builder = apply_auth(self.post(SYNTHESIZE_PATH).json(request), auth)?;
        let response = self.send(builder).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let data = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("Failed to read audio body: {e}")))?;

        let clip = AudioClip::new(data, content_type.as_deref());
        info!("Received {} bytes of {}", clip.len(), clip.content_type);

        Ok(clip)
    }
}
