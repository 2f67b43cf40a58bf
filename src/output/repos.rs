//! Repository rows

use super::common::{format_bool, format_timestamp, render_list};
use super::ReportRow;
use crate::github::Repository;
use crate::report::models::OrgRepositories;

#[derive(Debug, Clone, PartialEq)]
pub struct RepoRow {
    pub id: String,
    pub owner: String,
    pub name: String,
    pub visibility: String,
    pub archived: String,
    pub is_fork: String,
    pub created_at: String,
    pub pushed_at: String,
    /// `[slug:PERMISSION ...]`
    pub teams: String,
    pub topics: String,
}

impl RepoRow {
    pub fn new(repo: &Repository) -> Self {
        Self {
            id: repo.id.clone(),
            owner: repo.owner.clone(),
            name: repo.name.clone(),
            visibility: repo.visibility.clone(),
            archived: format_bool(repo.is_archived),
            is_fork: format_bool(repo.is_fork),
            created_at: format_timestamp(&repo.created_at),
            pushed_at: repo
                .pushed_at
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_default(),
            teams: render_list(
                repo.teams
                    .iter()
                    .map(|t| format!("{}:{}", t.team, t.permission)),
            ),
            topics: render_list(&repo.topics),
        }
    }

    pub fn from_tree(tree: &[OrgRepositories]) -> Vec<Self> {
        tree.iter()
            .flat_map(|entry| entry.repositories.iter().map(Self::new))
            .collect()
    }
}

impl ReportRow for RepoRow {
    const HEADER: &'static [&'static str] = &[
        "id",
        "owner",
        "name",
        "visibility",
        "archived",
        "is_fork",
        "created_at",
        "pushed_at",
        "teams",
        "topics",
    ];

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.owner.clone(),
            self.name.clone(),
            self.visibility.clone(),
            self.archived.clone(),
            self.is_fork.clone(),
            self.created_at.clone(),
            self.pushed_at.clone(),
            self.teams.clone(),
            self.topics.clone(),
        ]
    }
}
