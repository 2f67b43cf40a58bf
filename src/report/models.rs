//! Nested result trees, one per report kind

use crate::github::{Collaborator, Member, Organization, Package, Repository, Team};

/// An organization with every member and their role
#[derive(Debug, Clone, PartialEq)]
pub struct OrgMembership {
    pub org: Organization,
    pub members: Vec<Member>,
}

/// An organization with its teams, each team's `members` populated
#[derive(Debug, Clone, PartialEq)]
pub struct OrgTeams {
    pub org: Organization,
    pub teams: Vec<Team>,
}

/// An organization with its repositories, each repository's `teams` populated
#[derive(Debug, Clone, PartialEq)]
pub struct OrgRepositories {
    pub org: Organization,
    pub repositories: Vec<Repository>,
}

/// A repository with everyone who can access it
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryCollaborators {
    pub org_login: String,
    pub repository: Repository,
    pub collaborators: Vec<Collaborator>,
}

/// Packages published by one organization
#[derive(Debug, Clone, PartialEq)]
pub struct OrgPackages {
    pub org_login: String,
    pub packages: Vec<Package>,
}
