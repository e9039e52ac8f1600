//! Auth strategy selection and per-request auth material.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Header carrying the signing timestamp.
pub const TIMESTAMP_HEADER: &str = "x-ts";

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "x-sig";

/// Which auth strategy the client uses for protected calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Signed requests: timestamp and signature fetched from `/client-token`.
    Hmac,
    /// Bearer token from an external identity provider.
    #[default]
    Bearer,
}

impl AuthMode {
    /// Resolve the mode from a configuration selector.
    ///
    /// Only the exact value `hmac` selects signed requests; anything else,
    /// including an unset selector, falls back to bearer.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("hmac") => Self::Hmac,
            _ => Self::Bearer,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hmac => "hmac",
            Self::Bearer => "bearer",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `/client-token` call: the request the signature will cover.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRequest {
    pub path: String,
    pub method: String,
}

impl TokenRequest {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
        }
    }
}

/// Response of a `/client-token` call.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientToken {
    /// Unix timestamp the signature was issued at, as the server formatted it.
    pub ts: String,
    /// Hex signature over method, path and timestamp.
    pub sig: String,
}

impl fmt::Debug for ClientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientToken")
            .field("ts", &self.ts)
            .field("sig", &"<redacted>")
            .finish()
    }
}

/// Auth material attached to a single synthesis call.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthContext {
    Hmac { timestamp: String, signature: String },
    Bearer { token: String },
    /// Bearer mode with no token available. The call still goes out.
    Anonymous,
}

impl AuthContext {
    /// Header name/value pairs to attach, in insertion order.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Hmac {
                timestamp,
                signature,
            } => vec![
                (TIMESTAMP_HEADER, timestamp.clone()),
                (SIGNATURE_HEADER, signature.clone()),
            ],
            Self::Bearer { token } => vec![("authorization", format!("Bearer {token}"))],
            Self::Anonymous => Vec::new(),
        }
    }

    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// The auth mode this context was built for.
    pub const fn mode(&self) -> AuthMode {
        match self {
            Self::Hmac { .. } => AuthMode::Hmac,
            Self::Bearer { .. } | Self::Anonymous => AuthMode::Bearer,
        }
    }
}

impl From<ClientToken> for AuthContext {
    fn from(token: ClientToken) -> Self {
        Self::Hmac {
            timestamp: token.ts,
            signature: token.sig,
        }
    }
}

impl From<Option<String>> for AuthContext {
    fn from(token: Option<String>) -> Self {
        token.map_or(Self::Anonymous, |token| Self::Bearer { token })
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hmac { timestamp, .. } => f
                .debug_struct("Hmac")
                .field("timestamp", timestamp)
                .field("signature", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
            Self::Anonymous => f.write_str("Anonymous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mode_selector() {
        assert_eq!(AuthMode::from_selector(Some("hmac")), AuthMode::Hmac);
        assert_eq!(AuthMode::from_selector(Some("HMAC")), AuthMode::Bearer);
        assert_eq!(AuthMode::from_selector(Some("secure")), AuthMode::Bearer);
        assert_eq!(AuthMode::from_selector(None), AuthMode::Bearer);
    }

    #[test]
    fn test_hmac_headers() {
        let ctx = AuthContext::from(ClientToken {
            ts: "T".into(),
            sig: "S".into(),
        });
        assert_eq!(
            ctx.headers(),
            vec![("x-ts", "T".to_string()), ("x-sig", "S".to_string())]
        );
        assert_eq!(ctx.mode(), AuthMode::Hmac);
    }

    #[test]
    fn test_bearer_headers() {
        let ctx = AuthContext::from(Some("abc".to_string()));
        assert_eq!(
            ctx.headers(),
            vec![("authorization", "Bearer abc".to_string())]
        );

        let anon = AuthContext::from(None);
        assert!(anon.is_anonymous());
        assert!(anon.headers().is_empty());
        assert_eq!(anon.mode(), AuthMode::Bearer);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let ctx = AuthContext::Bearer {
            token: "super-secret".into(),
        };
        assert!(!format!("{ctx:?}").contains("super-secret"));

        let token = ClientToken {
            ts: "1700000000".into(),
            sig: "deadbeef".into(),
        };
        let shown = format!("{token:?}");
        assert!(shown.contains("1700000000"));
        assert!(!shown.contains("deadbeef"));
    }

    proptest! {
        #[test]
        fn prop_non_hmac_selector_is_bearer(selector in "\\PC*") {
            prop_assume!(selector != "hmac");
            prop_assert_eq!(AuthMode::from_selector(Some(selector.as_str())), AuthMode::Bearer);
        }
    }
}
