//! Enterprise membership rows

use super::ReportRow;
use crate::github::Member;

#[derive(Debug, Clone, PartialEq)]
pub struct EnterpriseMemberRow {
    pub login: String,
    pub name: String,
    pub id: String,
}

impl EnterpriseMemberRow {
    pub fn new(member: &Member) -> Self {
        Self {
            login: member.login.clone(),
            name: member.name().to_string(),
            id: member.id.clone(),
        }
    }

    pub fn from_members(members: &[Member]) -> Vec<Self> {
        members.iter().map(Self::new).collect()
    }
}

impl ReportRow for EnterpriseMemberRow {
    const HEADER: &'static [&'static str] = &["Login", "Name", "Id"];

    fn record(&self) -> Vec<String> {
        vec![self.login.clone(), self.name.clone(), self.id.clone()]
    }
}
