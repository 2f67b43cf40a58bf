//! Repositories module - organization repositories and their collaborators

mod api;
mod models;

pub use models::{Collaborator, Repository};
