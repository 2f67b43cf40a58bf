//! Organizations module - list the organizations of an enterprise

mod api;
mod models;

pub use models::Organization;
