// Grouping export lines by registrable domain

use crate::domain::extract_domain;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// All entries sharing one registrable domain, sorted by full line text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainGroup {
    pub domain: String,
    pub count: usize,
    pub entries: Vec<String>,
}

/// Bucket lines by domain.
///
/// Groups come back in ascending domain order and entries within a group in
/// ascending order of the whole line (title included), so the result does not
/// depend on input order.
pub fn group_entries<S: AsRef<str>>(lines: &[S]) -> Vec<DomainGroup> {
    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for line in lines {
        let line = line.as_ref();
        buckets
            .entry(extract_domain(line))
            .or_default()
            .push(line.to_string());
    }

    let groups: Vec<DomainGroup> = buckets
        .into_iter()
        .map(|(domain, mut entries)| {
            entries.sort();
            DomainGroup {
                domain,
                count: entries.len(),
                entries,
            }
        })
        .collect();

    debug!(lines = lines.len(), groups = groups.len(), "grouped entries");
    groups
}

/// Total number of entries across all groups.
pub fn total_entries(groups: &[DomainGroup]) -> usize {
    groups.iter().map(|g| g.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OTHER_OR_LOCAL;

    #[test]
    fn empty_input_has_no_groups() {
        let lines: Vec<String> = Vec::new();
        assert!(group_entries(&lines).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let groups = group_entries(&["https://a.com", "https://a.com"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 2);
    }

    #[test]
    fn sentinel_sorts_with_other_domains() {
        let groups = group_entries(&["garbage", "https://zzz.com", "https://aaa.com"]);
        let domains: Vec<&str> = groups.iter().map(|g| g.domain.as_str()).collect();
        assert_eq!(domains, vec!["aaa.com", OTHER_OR_LOCAL, "zzz.com"]);
    }

    #[test]
    fn total_entries_sums_counts() {
        let groups = group_entries(&["https://a.com", "https://b.com/1", "https://b.com/2"]);
        assert_eq!(total_entries(&groups), 3);
    }
}
