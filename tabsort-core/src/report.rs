// Report rendering for grouped exports

use crate::error::Result;
use crate::group::DomainGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Header line introducing a domain group.
pub fn group_header(group: &DomainGroup) -> String {
    format!(
        "{domain} | --- {domain} ({count} links) ---",
        domain = group.domain,
        count = group.count
    )
}

/// Render groups as the plain text report.
///
/// Each group is a header surrounded by blank lines followed by its entries.
/// The report never starts with a blank line and has no trailing newline.
pub fn render_text(groups: &[DomainGroup]) -> String {
    let mut blocks: Vec<String> = Vec::new();
    for group in groups {
        blocks.push(format!("\n{}\n", group_header(group)));
        blocks.extend(group.entries.iter().cloned());
    }

    if let Some(first) = blocks.first_mut() {
        *first = first.trim_start().to_string();
    }

    blocks.join("\n")
}

/// Render groups as a pretty-printed JSON array.
pub fn render_json(groups: &[DomainGroup]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}

pub fn render(groups: &[DomainGroup], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(groups)),
        ReportFormat::Json => render_json(groups),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(domain: &str, entries: &[&str]) -> DomainGroup {
        DomainGroup {
            domain: domain.to_string(),
            count: entries.len(),
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn header_format() {
        let g = group("example.com", &["https://example.com/a", "https://example.com/b"]);
        assert_eq!(group_header(&g), "example.com | --- example.com (2 links) ---");
    }

    #[test]
    fn single_group_layout() {
        let text = render_text(&[group("a.com", &["https://a.com/1", "https://a.com/2"])]);
        assert_eq!(
            text,
            "a.com | --- a.com (2 links) ---\n\nhttps://a.com/1\nhttps://a.com/2"
        );
    }

    #[test]
    fn groups_are_separated_by_blank_line() {
        let text = render_text(&[
            group("a.com", &["https://a.com/1"]),
            group("b.com", &["https://b.com/1"]),
        ]);
        assert_eq!(
            text,
            "a.com | --- a.com (1 links) ---\n\nhttps://a.com/1\n\n\
             b.com | --- b.com (1 links) ---\n\nhttps://b.com/1"
        );
    }

    #[test]
    fn empty_groups_render_empty() {
        assert_eq!(render_text(&[]), "");
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn format_from_str() {
        assert_eq!(ReportFormat::from_str("TEXT"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::from_str("Json"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_str("csv"), None);
    }
}
