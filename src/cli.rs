use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Ecosystems whose native package manager can be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Ecosystem {
    /// Maven projects (pom.xml)
    Maven,
    /// npm projects (package.json)
    Npm,
    /// pip projects (requirements.txt)
    Pypi,
    /// Run every ecosystem pipeline in sequence
    All,
}

/// Generate SBOMs by driving a project's native package manager
#[derive(Parser, Debug)]
#[command(name = "polybom")]
#[command(version)]
#[command(about = "Generate SBOMs by driving Maven, npm, or pip", long_about = None)]
pub struct Args {
    /// Which ecosystem pipeline to run
    #[arg(short, long, value_enum)]
    pub ecosystem: Ecosystem,

    /// Directory containing the project manifests (pom.xml, package.json,
    /// requirements.txt)
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Directory containing the document and component templates
    #[arg(long, default_value = "templates")]
    pub templates_dir: PathBuf,

    /// Directory the finished documents are written to
    #[arg(long, default_value = "sboms")]
    pub output_dir: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecosystem_values_parse() {
        let args = Args::try_parse_from(["polybom", "--ecosystem", "npm"]).unwrap();
        assert_eq!(args.ecosystem, Ecosystem::Npm);
        assert_eq!(args.input_dir, PathBuf::from("input"));
        assert_eq!(args.output_dir, PathBuf::from("sboms"));
    }

    #[test]
    fn test_short_flag_and_directories() {
        let args = Args::try_parse_from([
            "polybom",
            "-e",
            "pypi",
            "--input-dir",
            "/proj/in",
            "--templates-dir",
            "/proj/tpl",
            "--output-dir",
            "/proj/out",
        ])
        .unwrap();
        assert_eq!(args.ecosystem, Ecosystem::Pypi);
        assert_eq!(args.input_dir, PathBuf::from("/proj/in"));
        assert_eq!(args.templates_dir, PathBuf::from("/proj/tpl"));
        assert_eq!(args.output_dir, PathBuf::from("/proj/out"));
    }

    #[test]
    fn test_missing_ecosystem_is_an_error() {
        assert!(Args::try_parse_from(["polybom"]).is_err());
    }

    #[test]
    fn test_invalid_ecosystem_is_an_error() {
        assert!(Args::try_parse_from(["polybom", "--ecosystem", "cargo"]).is_err());
    }
}
