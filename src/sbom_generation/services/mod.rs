pub mod assembler;
pub mod enricher;
pub mod materializer;

pub use assembler::assemble;
pub use enricher::MetadataEnricher;
pub use materializer::{materialize_component, substitute};
