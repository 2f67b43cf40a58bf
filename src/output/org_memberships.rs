//! Organization membership rows

use super::common::join_logins;
use super::ReportRow;
use crate::report::models::OrgMembership;

/// One row per organization; admins and other members in separate columns
#[derive(Debug, Clone, PartialEq)]
pub struct OrgMembershipRow {
    pub org_name: String,
    pub org_id: String,
    pub admins: String,
    pub members: String,
}

impl OrgMembershipRow {
    pub fn new(entry: &OrgMembership) -> Self {
        let (admins, members): (Vec<_>, Vec<_>) =
            entry.members.iter().partition(|m| m.is_admin());

        Self {
            org_name: entry.org.login.clone(),
            org_id: entry.org.id.clone(),
            admins: join_logins(admins.iter().map(|m| m.login.as_str())),
            members: join_logins(members.iter().map(|m| m.login.as_str())),
        }
    }

    pub fn from_tree(tree: &[OrgMembership]) -> Vec<Self> {
        tree.iter().map(Self::new).collect()
    }
}

impl ReportRow for OrgMembershipRow {
    const HEADER: &'static [&'static str] = &["Org Name", "Org ID", "Org Admins", "Org Members"];

    fn record(&self) -> Vec<String> {
        vec![
            self.org_name.clone(),
            self.org_id.clone(),
            self.admins.clone(),
            self.members.clone(),
        ]
    }
}
