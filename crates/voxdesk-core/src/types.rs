//! Core domain types for voxdesk.

pub mod audio;
pub mod auth;
pub mod service;
pub mod synthesis;

pub use audio::{AudioClip, CLIP_EXTENSIONS};
pub use auth::{AuthContext, AuthMode, ClientToken, TokenRequest};
pub use service::{ServiceDirectory, ServiceList};
pub use synthesis::SynthesisRequest;
