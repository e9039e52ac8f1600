//! Synthesized audio payloads.

use bytes::Bytes;

/// Content type assumed when the server does not send one.
pub const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

/// Every extension [`AudioClip::extension`] can return.
pub const CLIP_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav", "pcm", "ulaw", "alaw", "bin"];

/// Audio returned by a synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    /// Raw encoded audio.
    pub data: Bytes,
    /// MIME type reported by the server, without parameters.
    pub content_type: String,
}

impl AudioClip {
    pub fn new(data: impl Into<Bytes>, content_type: Option<&str>) -> Self {
        let content_type = content_type
            .and_then(|ct| ct.split(';').next())
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_ascii_lowercase();

        Self {
            data: data.into(),
            content_type,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// File extension matching the content type.
    pub fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "audio/mpeg" | "audio/mp3" => "mp3",
            "audio/ogg" | "audio/opus" => "ogg",
            "audio/wav" | "audio/x-wav" | "audio/wave" => "wav",
            "audio/l16" | "audio/pcm" => "pcm",
            "audio/basic" | "audio/mulaw" => "ulaw",
            "audio/alaw" => "alaw",
            _ => "bin",
        }
    }
}
