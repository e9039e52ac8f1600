//! # voxdesk-client
//!
//! HTTP client for the speech gateway.
//!
//! This crate lists the services the gateway has enabled and calls its
//! synthesis endpoint, attaching either a signed timestamp/signature pair or
//! a bearer token from an [`IdentityProvider`].

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod identity;

pub use client::{ClientConfig, GatewayClient};
pub use endpoints::{APIS_PATH, CLIENT_TOKEN_PATH, SYNTHESIZE_PATH};
pub use identity::{IdentityProvider, NoIdentity, StaticToken, TokenFile};
