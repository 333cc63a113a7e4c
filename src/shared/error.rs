use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - summary generated, or nothing to generate
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (metadata read/parse error, write error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for summary generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to read metadata file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    MetadataRead { path: PathBuf, details: String },

    #[error("Failed to parse build metadata: {details}\n\n💡 Hint: Please verify that the file was produced by `docker buildx build --metadata-file`")]
    MetadataParse { details: String },

    #[error("Failed to write summary: {target}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    SummaryWrite { target: String, details: String },

    #[error("GITHUB_STEP_SUMMARY is not set\n\n💡 Hint: --github-summary only works inside a GitHub Actions job step")]
    StepSummaryUnavailable,

    #[error("Summary document was already persisted")]
    AlreadyPersisted,
}
