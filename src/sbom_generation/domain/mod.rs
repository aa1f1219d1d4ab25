pub mod component;
pub mod dependency;
pub mod purl;

pub use component::{ExternalReference, NormalizedComponent, PackageMetadata, SubjectInfo, ToolInfo};
pub use dependency::DependencyEdge;
