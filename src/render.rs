//! Markdown rendering for a merged change set

use crate::models::ChangeSet;

const SECTIONS: [(&str, &str); 3] = [
    ("new", "**New**"),
    ("updated", "**Updated**"),
    ("fixed", "**Fixed**"),
];

/// Render a change set as the Markdown fragment for one version.
///
/// Categories always appear in New, Updated, Fixed order and only when
/// non-empty; unrecognized categories are omitted. Returns an empty string
/// when there is nothing to publish. A non-empty fragment ends with exactly
/// one trailing newline.
pub fn render(changes: &ChangeSet, version: &str) -> String {
    if changes.is_empty() {
        return String::new();
    }

    let mut content = format!("### {}\n", version);
    for (key, label) in SECTIONS {
        let items = changes.items(key);
        if items.is_empty() {
            continue;
        }

        let list = items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n");
        content.push_str(&format!("\n{}\n{}\n", label, list));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{merge, ChangeEntry};

    fn changes(yaml: &str) -> ChangeSet {
        let entry: ChangeEntry = serde_yaml::from_str(yaml).unwrap();
        merge(vec![entry])
    }

    #[test]
    fn test_empty_changes_render_nothing() {
        assert_eq!(render(&merge(Vec::new()), "1.0.0"), "");
        assert_eq!(render(&changes("new: []\nupdated: []\nfixed: []"), "1.0.0"), "");
        assert_eq!(render(&changes("updated: []"), "1.0.0"), "");
    }

    #[test]
    fn test_version_header() {
        let markdown = render(&changes("new: [new item]"), "1.0.0");
        assert!(markdown.starts_with("### 1.0.0\n"));
    }

    #[test]
    fn test_only_non_empty_categories_appear() {
        let markdown = render(&changes("updated: [update 1]"), "1.0.0");
        assert!(!markdown.contains("**New**"));
        assert!(markdown.contains("**Updated**"));
        assert!(!markdown.contains("**Fixed**"));
    }

    #[test]
    fn test_category_order_is_fixed() {
        // Key order in the document must not matter.
        let markdown = render(
            &changes("fixed: [patch 1]\nnew: [feature 1]\nupdated: [update 1]"),
            "1.0.0",
        );
        assert_eq!(
            markdown,
            "### 1.0.0\n\n**New**\n- feature 1\n\n**Updated**\n- update 1\n\n**Fixed**\n- patch 1\n"
        );
    }

    #[test]
    fn test_unrecognized_categories_are_omitted() {
        let markdown = render(&changes("new: [feature 1]\nknights: [ni]"), "1.0.0");
        assert!(!markdown.contains("ni"));
        assert!(!markdown.contains("knights"));
    }

    #[test]
    fn test_ends_with_single_newline() {
        for doc in ["new: [a]", "new: [a]\nfixed: [b]", "fixed: [b]"] {
            let markdown = render(&changes(doc), "1.0.0");
            assert!(markdown.ends_with('\n'));
            assert!(!markdown.ends_with("\n\n"));
        }
    }
}
