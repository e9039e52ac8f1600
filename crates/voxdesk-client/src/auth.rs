//! Auth header construction for protected gateway calls.

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use tracing::debug;
use voxdesk_core::{AuthContext, AuthMode, Error, Result};

use crate::GatewayClient;

impl GatewayClient {
    /// Build the auth material for one call to `method path`.
    ///
    /// In [`AuthMode::Hmac`] this fetches a fresh timestamp/signature pair
    /// from the gateway first. In [`AuthMode::Bearer`] it asks the identity
    /// provider, and a missing token yields [`AuthContext::Anonymous`].
    pub async fn authorize(&self, path: &str, method: &Method) -> Result<AuthContext> {
        match self.auth_mode {
            AuthMode::Hmac => {
                let token = self.client_token(path, method).await?;
                debug!("Signed {method} {path} at ts={}", token.ts);
                Ok(AuthContext::from(token))
            }
            AuthMode::Bearer => {
                let token = self.identity.id_token().await?;
                if token.is_none() {
                    debug!("No identity token available, sending {method} {path} unauthenticated");
                }
                Ok(AuthContext::from(token))
            }
        }
    }
}

/// Attach the headers for `auth` to a request.
pub fn apply_auth(request: RequestBuilder, auth: &AuthContext) -> Result<RequestBuilder> {
    auth.headers()
        .into_iter()
        .try_fold(request, |request, (name, value)| {
            let value = HeaderValue::from_str(&value)
                .map_err(|e| Error::InvalidArgument(format!("Invalid {name} header value: {e}")))?;
            Ok(request.header(HeaderName::from_static(name), value))
        })
}
