//! PyPI adapter: consumes the indented text report of a dependency-tree
//! tool (pipdeptree) plus the set of packages the isolated install
//! actually added.
//!
//! The text format is inherently fragile, so all format sniffing lives
//! behind `parse_dependency_tree`; nothing else in the crate looks at
//! the raw report. A package may appear both as a parent key and as a
//! child reference under another parent without cross-deduplication;
//! that mirrors how the tool reports the same resolved version from
//! multiple positions in the graph.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::sbom_generation::domain::purl;
use crate::sbom_generation::domain::DependencyEdge;

const PACKAGE_MANAGER: &str = "pypi";

/// Tree-drawing connectors marking child lines in the report.
const CONNECTOR_GLYPHS: [&str; 2] = ["├──", "└──"];

const INSTALLED_MARKER: &str = "installed: ";

/// Range-prefix characters stripped from requirement version strings.
const RANGE_PREFIX_CHARS: [char; 4] = ['^', '~', '<', '>'];

/// Parent map: `name==version` keys to child `name==version` lists, in
/// discovery order.
pub type ParentMap = IndexMap<String, Vec<String>>;

/// Single pass over the report, carrying one "current parent" cursor.
///
/// Child lines (connector glyph present) are appended to the current
/// parent, deduplicated by exact string. Unindented lines become the new
/// cursor only if their `name==version` token is in `relevant_packages`;
/// otherwise the cursor is cleared and the subtree is ignored. Packages
/// present in the environment before installation are thereby excluded.
/// Every relevant package ends up with a map entry even when the tool
/// reported no children for it.
pub fn parse_dependency_tree(report: &str, relevant_packages: &BTreeSet<String>) -> ParentMap {
    let mut parent_map = ParentMap::new();
    let mut current_parent: Option<String> = None;

    for line in report.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if CONNECTOR_GLYPHS.iter().any(|glyph| line.contains(glyph)) {
            let Some(child) = parse_child_line(line) else {
                continue;
            };
            if let Some(parent) = &current_parent {
                let children = parent_map.entry(parent.clone()).or_default();
                if !children.contains(&child) {
                    children.push(child);
                }
            }
        } else {
            let Some(first_token) = line.split_whitespace().next() else {
                continue;
            };
            if relevant_packages.contains(first_token) {
                current_parent = Some(first_token.to_string());
                parent_map.entry(first_token.to_string()).or_default();
            } else {
                current_parent = None;
            }
        }
    }

    for package in relevant_packages {
        parent_map.entry(package.clone()).or_default();
    }

    parent_map
}

/// Extracts `name==installed-version` from a child line such as
/// `│   ├── six [required: >=1.5, installed: 1.16.0]`.
fn parse_child_line(line: &str) -> Option<String> {
    let before_bracket = line.split('[').next().unwrap_or(line);
    // Token 0 is the connector glyph (with any guide characters), token 1
    // the package name.
    let name = before_bracket.split_whitespace().nth(1)?.to_lowercase();

    let after_marker = match line.rfind(INSTALLED_MARKER) {
        Some(index) => &line[index + INSTALLED_MARKER.len()..],
        None => line,
    };
    let version = after_marker.trim_end().trim_end_matches(']');

    Some(format!("{}=={}", name, version))
}

/// Splits a `name==version` key into a namespaced purl, lower-casing the
/// name. Entries without the separator are malformed and yield `None`.
pub fn to_purl(name_and_version: &str) -> Option<String> {
    let (name, version) = name_and_version.split_once("==")?;
    Some(purl::namespaced(
        PACKAGE_MANAGER,
        &name.to_lowercase(),
        version,
    ))
}

/// Edge for one parent entry of the map.
pub fn edge_for_parent(parent: &str, children: &[String]) -> Option<DependencyEdge> {
    let parent_ref = to_purl(parent)?;
    let depends_on = children
        .iter()
        .filter_map(|child| to_purl(child))
        .collect();
    Some(DependencyEdge::new(parent_ref, depends_on))
}

/// Synthetic edge from the document subject to the pinned requirements.
///
/// Only `name==version` lines count; blank lines and `#` comments are
/// skipped, and range prefixes are stripped from the version.
pub fn top_level_edge(requirements: &str, subject_ref: &str) -> DependencyEdge {
    let mut depends_on = Vec::new();
    for line in requirements.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, version)) = line.split_once("==") {
            depends_on.push(purl::namespaced(
                PACKAGE_MANAGER,
                &name.to_lowercase(),
                version.trim_start_matches(RANGE_PREFIX_CHARS),
            ));
        }
    }
    DependencyEdge::new(subject_ref, depends_on)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relevant(entries: &[&str]) -> BTreeSet<String> {
        entries.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_parse_single_parent_with_child() {
        let report = "foo==1.0\n├── six [required: Any, installed: 1.16.0]\nbar==2.0\n";
        let map = parse_dependency_tree(report, &relevant(&["foo==1.0"]));

        assert_eq!(map.get("foo==1.0").unwrap(), &vec!["six==1.16.0".to_string()]);
        // bar is not relevant: neither a parent entry nor a child sink.
        assert!(!map.contains_key("bar==2.0"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_children_under_irrelevant_parent_are_dropped() {
        let report = "\
preinstalled==9.9
├── wheel [required: Any, installed: 0.43.0]
requests==2.31.0
├── urllib3 [required: >=1.21.1, installed: 2.2.1]
";
        let map = parse_dependency_tree(report, &relevant(&["requests==2.31.0"]));
        assert_eq!(
            map.get("requests==2.31.0").unwrap(),
            &vec!["urllib3==2.2.1".to_string()]
        );
        assert!(!map.contains_key("preinstalled==9.9"));
        assert!(map.values().all(|children| !children
            .iter()
            .any(|child| child.starts_with("wheel"))));
    }

    #[test]
    fn test_relevant_package_without_children_gets_empty_entry() {
        let report = "requests==2.31.0\n";
        let map = parse_dependency_tree(
            report,
            &relevant(&["requests==2.31.0", "six==1.16.0"]),
        );
        assert!(map.get("six==1.16.0").unwrap().is_empty());
        assert!(map.get("requests==2.31.0").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_children_are_deduplicated() {
        let report = "\
foo==1.0
├── six [required: Any, installed: 1.16.0]
├── six [required: >=1.5, installed: 1.16.0]
";
        let map = parse_dependency_tree(report, &relevant(&["foo==1.0"]));
        assert_eq!(map.get("foo==1.0").unwrap().len(), 1);
    }

    #[test]
    fn test_branch_and_corner_connectors() {
        let report = "\
requests==2.31.0
├── charset-normalizer [required: >=2, installed: 3.3.2]
└── urllib3 [required: >=1.21.1, installed: 2.2.1]
";
        let map = parse_dependency_tree(report, &relevant(&["requests==2.31.0"]));
        let children = map.get("requests==2.31.0").unwrap();
        assert_eq!(
            children,
            &vec![
                "charset-normalizer==3.3.2".to_string(),
                "urllib3==2.2.1".to_string(),
            ]
        );
    }

    #[test]
    fn test_child_names_are_lowercased() {
        let report = "foo==1.0\n├── PyYAML [required: Any, installed: 6.0.1]\n";
        let map = parse_dependency_tree(report, &relevant(&["foo==1.0"]));
        assert_eq!(map.get("foo==1.0").unwrap(), &vec!["pyyaml==6.0.1".to_string()]);
    }

    #[test]
    fn test_parent_can_also_appear_as_child_without_cross_dedup() {
        let report = "\
foo==1.0
├── six [required: Any, installed: 1.16.0]
six==1.16.0
";
        let map = parse_dependency_tree(report, &relevant(&["foo==1.0", "six==1.16.0"]));
        assert!(map.contains_key("six==1.16.0"));
        assert!(map
            .get("foo==1.0")
            .unwrap()
            .contains(&"six==1.16.0".to_string()));
    }

    #[test]
    fn test_to_purl() {
        assert_eq!(
            to_purl("PyYAML==6.0.1").as_deref(),
            Some("pkg:pypi/pyyaml@6.0.1")
        );
        assert_eq!(to_purl("malformed"), None);
    }

    #[test]
    fn test_edge_for_parent() {
        let edge = edge_for_parent("foo==1.0", &["six==1.16.0".to_string()]).unwrap();
        assert_eq!(edge.bom_ref, "pkg:pypi/foo@1.0");
        assert_eq!(edge.depends_on, vec!["pkg:pypi/six@1.16.0".to_string()]);
    }

    #[test]
    fn test_top_level_edge_skips_comments_and_strips_prefixes() {
        let requirements = "\
# pinned for reproducibility
requests==2.31.0

Flask==~3.0.0
not-pinned>=1.0
";
        let edge = top_level_edge(requirements, "pypi-packages@0.1.0");
        assert_eq!(edge.bom_ref, "pypi-packages@0.1.0");
        assert_eq!(
            edge.depends_on,
            vec![
                "pkg:pypi/requests@2.31.0".to_string(),
                "pkg:pypi/flask@3.0.0".to_string(),
            ]
        );
    }
}
