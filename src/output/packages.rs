//! Package rows

use super::ReportRow;
use crate::report::models::OrgPackages;

#[derive(Debug, Clone, PartialEq)]
pub struct PackageRow {
    pub package_name: String,
    pub repository_name: String,
}

impl PackageRow {
    pub fn from_tree(tree: &OrgPackages) -> Vec<Self> {
        tree.packages
            .iter()
            .map(|p| Self {
                package_name: p.name.clone(),
                repository_name: p.repository().to_string(),
            })
            .collect()
    }
}

impl ReportRow for PackageRow {
    const HEADER: &'static [&'static str] = &["Package Name", "Repository Name"];

    fn record(&self) -> Vec<String> {
        vec![self.package_name.clone(), self.repository_name.clone()]
    }
}
