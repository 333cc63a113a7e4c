use clap::Parser;
use std::path::PathBuf;

use buildkit_summary::application::factories::SummaryTarget;

/// Environment variable that disables summary generation entirely
pub const DISABLE_ENV: &str = "DOCKER_BUILD_SUMMARY";

/// Render a Markdown build summary from BuildKit metadata
#[derive(Parser, Debug)]
#[command(name = "buildkit-summary")]
#[command(version)]
#[command(about = "Render a Markdown build summary from BuildKit metadata", long_about = None)]
pub struct Args {
    /// Path to the metadata file written by `docker buildx build --metadata-file`
    #[arg(short, long)]
    pub metadata_file: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, conflicts_with = "github_summary")]
    pub output: Option<PathBuf>,

    /// Append the summary to the GitHub Actions step summary instead
    #[arg(long)]
    pub github_summary: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves the output target from the parsed flags
    pub fn summary_target(&self) -> SummaryTarget {
        if self.github_summary {
            SummaryTarget::StepSummary
        } else if let Some(path) = &self.output {
            SummaryTarget::File(path.clone())
        } else {
            SummaryTarget::Stdout
        }
    }
}

/// Returns true when the environment opts out of summary generation.
/// GitHub workflows set DOCKER_BUILD_SUMMARY to "false" or "0" to skip.
pub fn summary_disabled(value: Option<&str>) -> bool {
    match value {
        Some(value) => {
            let value = value.trim();
            value.eq_ignore_ascii_case("false") || value == "0"
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_target_is_stdout() {
        let args = Args::try_parse_from(["buildkit-summary"]).unwrap();
        assert!(args.metadata_file.is_none());
        assert_eq!(args.summary_target(), SummaryTarget::Stdout);
    }

    #[test]
    fn test_args_metadata_file() {
        let args =
            Args::try_parse_from(["buildkit-summary", "--metadata-file", "metadata.json"])
                .unwrap();
        assert_eq!(args.metadata_file, Some(PathBuf::from("metadata.json")));
    }

    #[test]
    fn test_args_output_target_is_file() {
        let args = Args::try_parse_from(["buildkit-summary", "--output", "summary.md"]).unwrap();
        assert_eq!(
            args.summary_target(),
            SummaryTarget::File(PathBuf::from("summary.md"))
        );
    }

    #[test]
    fn test_args_github_summary_target() {
        let args = Args::try_parse_from(["buildkit-summary", "--github-summary"]).unwrap();
        assert_eq!(args.summary_target(), SummaryTarget::StepSummary);
    }

    #[test]
    fn test_args_output_conflicts_with_github_summary() {
        let result = Args::try_parse_from([
            "buildkit-summary",
            "--output",
            "summary.md",
            "--github-summary",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::try_parse_from([
            "buildkit-summary",
            "-m",
            "metadata.json",
            "-o",
            "summary.md",
        ])
        .unwrap();
        assert_eq!(args.metadata_file, Some(PathBuf::from("metadata.json")));
        assert_eq!(
            args.summary_target(),
            SummaryTarget::File(PathBuf::from("summary.md"))
        );
    }

    #[test]
    fn test_summary_disabled_unset() {
        assert!(!summary_disabled(None));
    }

    #[test]
    fn test_summary_disabled_false_values() {
        assert!(summary_disabled(Some("false")));
        assert!(summary_disabled(Some("FALSE")));
        assert!(summary_disabled(Some("False")));
        assert!(summary_disabled(Some("0")));
        assert!(summary_disabled(Some("  false  ")));
    }

    #[test]
    fn test_summary_disabled_other_values() {
        assert!(!summary_disabled(Some("true")));
        assert!(!summary_disabled(Some("1")));
        assert!(!summary_disabled(Some("")));
        assert!(!summary_disabled(Some("no")));
    }
}
