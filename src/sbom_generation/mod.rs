//! Core SBOM generation logic: domain types, ecosystem adapters, and
//! the enrich/materialize/assemble services.

pub mod domain;
pub mod ecosystems;
pub mod services;
