//! Members module - enterprise members, organization members with role, team members

mod api;
mod models;

pub use models::{Member, MemberRole};
