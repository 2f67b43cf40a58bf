//! Packages module - packages published by an organization

mod api;
mod models;

pub use models::Package;
