//! # voxdesk-core
//!
//! Core types and error handling for the voxdesk speech gateway client.

pub mod error;
pub mod types;

pub use error::{Error, HttpError, Result};
pub use types::*;
