//! Configuration management module

pub mod loader;
pub mod template;

pub use loader::{Config, CredentialOverrides};
pub use template::CONFIG_TEMPLATE;
