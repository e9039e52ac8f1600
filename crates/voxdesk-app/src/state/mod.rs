//! Front-end state management.

pub mod session;

pub use session::Session;
