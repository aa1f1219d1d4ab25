//! Canonicalization of package references (purls and bom-refs).
//!
//! Two cleanups are needed before a reference can act as a component
//! identity or an edge endpoint:
//!
//! - Maven's CycloneDX plugin appends a `?type=jar` qualifier to every
//!   purl and bom-ref; the qualifier carries no identity and is cut off.
//! - npm lock-files key packages by their installation path
//!   (`node_modules/a/node_modules/b`), which records where a dependency
//!   lives on disk, not what it is. Only the segment after the last
//!   `node_modules/` marker names the package.

/// Marker npm uses for nested installation directories.
const INSTALL_DIR_MARKER: &str = "node_modules/";

/// Qualifier suffix some ecosystems append to a purl.
const TYPE_QUALIFIER: &str = "?type=";

/// Removes a trailing `?type=` qualifier from a purl or bom-ref.
///
/// References without the qualifier are returned unchanged, which makes
/// the operation idempotent.
pub fn clean(reference: &str) -> &str {
    match reference.find(TYPE_QUALIFIER) {
        Some(index) => &reference[..index],
        None => reference,
    }
}

/// Collapses an npm installation path to the package's own name.
///
/// Takes the substring after the last `node_modules/` marker and
/// lower-cases it. Paths without the marker are only lower-cased, so
/// scoped names like `@babel/core` survive intact.
pub fn normalize_install_path(raw_path: &str) -> String {
    let name = match raw_path.rfind(INSTALL_DIR_MARKER) {
        Some(index) => &raw_path[index + INSTALL_DIR_MARKER.len()..],
        None => raw_path,
    };
    name.to_lowercase()
}

/// Builds the full namespaced purl `pkg:<manager>/<name>@<version>`.
pub fn namespaced(package_manager: &str, name: &str, version: &str) -> String {
    format!("pkg:{}/{}@{}", package_manager, name, version)
}
