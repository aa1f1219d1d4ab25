//! Ecosystem adapters: one per package manager.
//!
//! Each adapter consumes that ecosystem's raw dependency representation
//! and produces the intermediate normalized form (components plus
//! parent-to-children edges). The three adapters never interact; they
//! only agree on the output types in `domain`.

pub mod maven;
pub mod npm;
pub mod pypi;
