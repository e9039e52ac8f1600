//! Client token endpoint for signed requests.

use reqwest::Method;
use voxdesk_core::{ClientToken, Error, Result, TokenRequest};

use crate::{endpoints::CLIENT_TOKEN_PATH, GatewayClient};

impl GatewayClient {
    /// Ask the gateway to sign a future `method path` call.
    ///
    /// # Returns
    /// The timestamp and signature to send as `x-ts` and `x-sig`.
    pub async fn client_token(&self, path: &str, method: &Method) -> Result<ClientToken> {
        let body = TokenRequest::new(path, method.as_str());

        self.send_json(self.post(CLIENT_TOKEN_PATH).json(&body))
            .await
            .map_err(|e| Error::ClientToken(e.to_string()))
    }
}
