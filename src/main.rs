mod adapters;
mod application;
mod cli;
mod ports;
mod sbom_generation;
mod shared;

use std::fs;
use std::process;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemWriter, FileTemplateStore};
use adapters::outbound::network::{NpmRegistryClient, PyPiRegistryClient};
use adapters::outbound::process::{
    MavenCycloneDxProducer, NpmLockfileProducer, PipDependencyTreeProducer,
};
use application::dto::GenerationSummary;
use application::use_cases::{GenerateMavenSbom, GenerateNpmSbom, GeneratePypiSbom};
use cli::{Args, Ecosystem};
use shared::error::SbomError;
use shared::Result;

fn main() {
    if let Err(error) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", error);

        let mut source = error.source();
        while let Some(cause) = source {
            eprintln!("\nCaused by: {}", cause);
            source = cause.source();
        }

        eprintln!();
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    fs::create_dir_all(&args.output_dir).map_err(|error| SbomError::FileWriteError {
        path: args.output_dir.clone(),
        details: error.to_string(),
    })?;

    match args.ecosystem {
        Ecosystem::Maven => report(run_maven(&args)?),
        Ecosystem::Npm => report(run_npm(&args)?),
        Ecosystem::Pypi => report(run_pypi(&args)?),
        Ecosystem::All => {
            report(run_maven(&args)?);
            report(run_npm(&args)?);
            report(run_pypi(&args)?);
        }
    }

    Ok(())
}

fn report(summary: GenerationSummary) {
    eprintln!(
        "📦 {}: {} component(s), {} dependency edge(s)",
        summary.package_manager, summary.component_count, summary.dependency_count
    );
}

fn run_maven(args: &Args) -> Result<GenerationSummary> {
    let use_case = GenerateMavenSbom::new(
        MavenCycloneDxProducer::new(args.input_dir.join("pom.xml")),
        FileTemplateStore::new(args.templates_dir.clone()),
        FileSystemWriter::new(args.output_dir.join("maven_sbom.json")),
        StderrProgressReporter::new(),
    );
    use_case.execute()
}

fn run_npm(args: &Args) -> Result<GenerationSummary> {
    let use_case = GenerateNpmSbom::new(
        NpmLockfileProducer::new(args.input_dir.join("package.json")),
        NpmRegistryClient::new()?,
        FileTemplateStore::new(args.templates_dir.clone()),
        FileSystemWriter::new(args.output_dir.join("npm_sbom.json")),
        StderrProgressReporter::new(),
    );
    use_case.execute()
}

fn run_pypi(args: &Args) -> Result<GenerationSummary> {
    let use_case = GeneratePypiSbom::new(
        PipDependencyTreeProducer::new(args.input_dir.join("requirements.txt")),
        PyPiRegistryClient::new()?,
        FileTemplateStore::new(args.templates_dir.clone()),
        FileSystemWriter::new(args.output_dir.join("pypi_sbom.json")),
        StderrProgressReporter::new(),
    );
    use_case.execute()
}
