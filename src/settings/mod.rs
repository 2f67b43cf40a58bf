//! Settings module
//!
//! Token and endpoint resolution from CLI flags, environment variables and an
//! optional YAML settings file.

mod models;
mod resolve;
mod store;

pub use models::Settings;
pub use resolve::{resolve_token, resolve_token_with, resolve_url, resolve_url_with};
pub use store::SettingsStore;
