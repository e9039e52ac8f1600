//! Synthesis request payload.

use serde::{Deserialize, Serialize};

/// Voice used when none is given.
pub const DEFAULT_VOICE: &str = "en-US-Neural2-C";

/// Audio encoding used when none is given.
pub const DEFAULT_ENCODING: &str = "MP3";

/// Body of a `/tts/synthesize` call.
///
/// Fields are forwarded as-is; the gateway is the only place that validates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SynthesisRequest {
    /// Text to speak.
    pub text: String,
    /// Voice identifier (e.g., "en-US-Neural2-C").
    pub voice: String,
    /// Encoding identifier (e.g., "MP3", "LINEAR16").
    pub encoding: String,
}

impl SynthesisRequest {
    /// Create a request with the default voice and encoding.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: DEFAULT_VOICE.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self::new(String::new())
    }
}
