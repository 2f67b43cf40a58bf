//! Collaborator rows

use super::common::{format_bool, render_list};
use super::ReportRow;
use crate::github::Collaborator;
use crate::report::models::RepositoryCollaborators;

/// One row per repository with every collaborator packed into one field
#[derive(Debug, Clone, PartialEq)]
pub struct CollaboratorRow {
    pub repo_id: String,
    pub org: String,
    pub repo: String,
    pub is_archived: String,
    pub collaborators: String,
}

/// `databaseId:name:email:login:PERMISSION`
fn collaborator_tuple(c: &Collaborator) -> String {
    let id = c.database_id.map(|id| id.to_string()).unwrap_or_default();
    format!("{}:{}:{}:{}:{}", id, c.name(), c.email(), c.login, c.permission)
}

impl CollaboratorRow {
    pub fn new(entry: &RepositoryCollaborators) -> Self {
        Self {
            repo_id: entry.repository.id.clone(),
            org: entry.org_login.clone(),
            repo: entry.repository.name.clone(),
            is_archived: format_bool(entry.repository.is_archived),
            collaborators: render_list(entry.collaborators.iter().map(collaborator_tuple)),
        }
    }

    pub fn from_tree(tree: &[RepositoryCollaborators]) -> Vec<Self> {
        tree.iter().map(Self::new).collect()
    }
}

impl ReportRow for CollaboratorRow {
    const HEADER: &'static [&'static str] = &["repo_id", "org", "repo", "is_archived", "Collaborators"];

    fn record(&self) -> Vec<String> {
        vec![
            self.repo_id.clone(),
            self.org.clone(),
            self.repo.clone(),
            self.is_archived.clone(),
            self.collaborators.clone(),
        ]
    }
}
