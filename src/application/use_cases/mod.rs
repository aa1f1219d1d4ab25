mod generate_maven_sbom;
mod generate_npm_sbom;
mod generate_pypi_sbom;

pub use generate_maven_sbom::GenerateMavenSbom;
pub use generate_npm_sbom::GenerateNpmSbom;
pub use generate_pypi_sbom::GeneratePypiSbom;
