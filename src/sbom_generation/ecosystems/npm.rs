//! npm adapter: consumes a package-lock.json `packages` map plus the
//! project manifest's top-level `dependencies` map.
//!
//! Lock-files key entries by installation path and list the same
//! resolved version multiple times under different paths, so identities
//! are deduplicated first-occurrence-wins. Map ordering is preserved via
//! `IndexMap` so the emitted sequence matches discovery order.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::sbom_generation::domain::purl;
use crate::sbom_generation::domain::DependencyEdge;

const PACKAGE_MANAGER: &str = "npm";

/// Fallback when a child entry carries no usable version.
const UNKNOWN_VERSION: &str = "Unknown";

/// Range-prefix characters stripped from manifest version strings.
const RANGE_PREFIX_CHARS: [char; 4] = ['^', '~', '<', '>'];

/// Flat package map of a package-lock.json (lockfileVersion 2+).
/// Values can be `null` for link entries; those are skipped.
#[derive(Debug, Deserialize)]
pub struct PackageLock {
    #[serde(default)]
    pub packages: IndexMap<String, Option<LockPackage>>,
}

#[derive(Debug, Deserialize)]
pub struct LockPackage {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, DependencySpec>,
}

/// A child version in a lock entry is either a plain string or a nested
/// object exposing `version`. Anything else degrades to `Unknown`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DependencySpec {
    Version(String),
    Detailed(DetailedSpec),
    Other(Value),
}

#[derive(Debug, Deserialize)]
pub struct DetailedSpec {
    #[serde(default)]
    pub version: Option<String>,
}

impl DependencySpec {
    fn resolve_version(&self) -> String {
        match self {
            DependencySpec::Version(version) => version.clone(),
            DependencySpec::Detailed(spec) => spec
                .version
                .clone()
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            DependencySpec::Other(_) => UNKNOWN_VERSION.to_string(),
        }
    }
}

/// Top-level project manifest (package.json), reduced to the direct
/// dependency declarations.
#[derive(Debug, Default, Deserialize)]
pub struct NpmManifest {
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
}

/// One surviving lock-file entry after path normalization and dedup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmPackage {
    pub name: String,
    pub version: String,
    /// `name@version`, the bom-ref/purl exposed in output.
    pub bare_ref: String,
    /// `pkg:npm/name@version`, the dedup key and edge source.
    pub identity: String,
    /// Child references, already namespaced.
    pub depends_on: Vec<String>,
}

/// Walks the lock-file's package map and produces the deduplicated
/// component sequence with each entry's child edges.
///
/// The empty-path entry represents the root project itself and is
/// skipped, as are null records. Duplicate identities are dropped
/// entirely, including their edges.
pub fn normalize_lockfile(lockfile: &PackageLock) -> Vec<NpmPackage> {
    let mut processed: HashSet<String> = HashSet::new();
    let mut packages = Vec::new();

    for (install_path, record) in &lockfile.packages {
        let Some(record) = record else { continue };
        if install_path.is_empty() {
            continue;
        }

        let name = purl::normalize_install_path(install_path);
        let version = record
            .version
            .clone()
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        let bare_ref = format!("{}@{}", name, version);
        let identity = purl::namespaced(PACKAGE_MANAGER, &name, &version);

        if !processed.insert(identity.clone()) {
            continue;
        }

        let depends_on = record
            .dependencies
            .iter()
            .map(|(child_name, spec)| {
                purl::namespaced(
                    PACKAGE_MANAGER,
                    &child_name.to_lowercase(),
                    &spec.resolve_version(),
                )
            })
            .collect();

        packages.push(NpmPackage {
            name,
            version,
            bare_ref,
            identity,
            depends_on,
        });
    }

    packages
}

/// Synthetic edge from the document subject to the direct dependencies
/// declared in the manifest, with range prefixes stripped from the
/// declared versions. Always placed first in the dependency sequence.
pub fn top_level_edge(manifest: &NpmManifest, subject_ref: &str) -> DependencyEdge {
    let depends_on = manifest
        .dependencies
        .iter()
        .map(|(name, range)| {
            purl::namespaced(
                PACKAGE_MANAGER,
                name,
                range.trim_start_matches(RANGE_PREFIX_CHARS),
            )
        })
        .collect();
    DependencyEdge::new(subject_ref, depends_on)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lockfile() -> PackageLock {
        serde_json::from_str(
            r#"{
                "packages": {
                    "": {"version": "0.1.0"},
                    "node_modules/accepts": {
                        "version": "1.3.8",
                        "dependencies": {
                            "mime-types": "~2.1.34",
                            "negotiator": {"version": "0.6.3"}
                        }
                    },
                    "node_modules/express/node_modules/accepts": {
                        "version": "1.3.8",
                        "dependencies": {"mime-types": "~2.1.34"}
                    },
                    "node_modules/link-entry": null,
                    "node_modules/No-Version": {}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_root_and_null_entries_are_skipped() {
        let packages = normalize_lockfile(&sample_lockfile());
        assert!(packages.iter().all(|p| !p.name.is_empty()));
        assert!(packages.iter().all(|p| p.name != "link-entry"));
    }

    #[test]
    fn test_duplicate_identity_first_occurrence_wins() {
        let packages = normalize_lockfile(&sample_lockfile());
        let accepts: Vec<_> = packages.iter().filter(|p| p.name == "accepts").collect();
        assert_eq!(accepts.len(), 1);
        // The first entry carries two children; the dropped duplicate only one.
        assert_eq!(accepts[0].depends_on.len(), 2);
    }

    #[test]
    fn test_child_specs_string_and_object_forms() {
        let packages = normalize_lockfile(&sample_lockfile());
        let accepts = packages.iter().find(|p| p.name == "accepts").unwrap();
        assert_eq!(
            accepts.depends_on,
            vec![
                "pkg:npm/mime-types@~2.1.34".to_string(),
                "pkg:npm/negotiator@0.6.3".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_version_defaults_to_unknown() {
        let packages = normalize_lockfile(&sample_lockfile());
        let no_version = packages.iter().find(|p| p.name == "no-version").unwrap();
        assert_eq!(no_version.version, "Unknown");
        assert_eq!(no_version.identity, "pkg:npm/no-version@Unknown");
    }

    #[test]
    fn test_install_paths_are_lowercased() {
        let lockfile: PackageLock = serde_json::from_str(
            r#"{"packages": {"node_modules/LoDash": {"version": "4.17.21"}}}"#,
        )
        .unwrap();
        let packages = normalize_lockfile(&lockfile);
        assert_eq!(packages[0].identity, "pkg:npm/lodash@4.17.21");
    }

    #[test]
    fn test_top_level_edge_strips_range_prefixes() {
        let manifest: NpmManifest = serde_json::from_str(
            r#"{"dependencies": {"express": "^4.18.2", "lodash": "~4.17.21", "chalk": "5.3.0"}}"#,
        )
        .unwrap();
        let edge = top_level_edge(&manifest, "npm-packages@0.1.0");
        assert_eq!(edge.bom_ref, "npm-packages@0.1.0");
        assert_eq!(
            edge.depends_on,
            vec![
                "pkg:npm/express@4.18.2".to_string(),
                "pkg:npm/lodash@4.17.21".to_string(),
                "pkg:npm/chalk@5.3.0".to_string(),
            ]
        );
    }

    #[test]
    fn test_lockfile_order_is_preserved() {
        let lockfile: PackageLock = serde_json::from_str(
            r#"{"packages": {
                "node_modules/zzz": {"version": "1.0.0"},
                "node_modules/aaa": {"version": "2.0.0"}
            }}"#,
        )
        .unwrap();
        let packages = normalize_lockfile(&lockfile);
        assert_eq!(packages[0].name, "zzz");
        assert_eq!(packages[1].name, "aaa");
    }
}
