//! Teams module - organization teams and team permissions on a repository

mod api;
mod models;

pub use models::{Team, TeamPermission};
