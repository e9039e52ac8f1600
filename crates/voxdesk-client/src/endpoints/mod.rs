//! Gateway endpoint implementations.

mod services;
mod synthesize;
mod token;

/// Service discovery endpoint.
pub const APIS_PATH: &str = "/apis";

/// Signed-request token endpoint.
pub const CLIENT_TOKEN_PATH: &str = "/client-token";

/// Speech synthesis endpoint.
pub const SYNTHESIZE_PATH: &str = "/tts/synthesize";
