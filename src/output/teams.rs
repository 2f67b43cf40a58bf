//! Team rows

use super::common::render_list;
use super::ReportRow;
use crate::github::{Organization, Team};
use crate::report::models::OrgTeams;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub id: String,
    pub organization: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Member logins as `[a b c]`
    pub members: String,
}

impl TeamRow {
    pub fn new(org: &Organization, team: &Team) -> Self {
        Self {
            id: team.id.clone(),
            organization: org.login.clone(),
            name: team.name.clone(),
            slug: team.slug.clone(),
            description: team.description().to_string(),
            members: render_list(team.members.iter().map(|m| m.login.as_str())),
        }
    }

    pub fn from_tree(tree: &[OrgTeams]) -> Vec<Self> {
        tree.iter()
            .flat_map(|entry| entry.teams.iter().map(|team| Self::new(&entry.org, team)))
            .collect()
    }
}

impl ReportRow for TeamRow {
    const HEADER: &'static [&'static str] =
        &["id", "organization", "name", "slug", "description", "members"];

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.organization.clone(),
            self.name.clone(),
            self.slug.clone(),
            self.description.clone(),
            self.members.clone(),
        ]
    }
}
