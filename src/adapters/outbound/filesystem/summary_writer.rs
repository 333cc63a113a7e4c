use crate::ports::outbound::SummaryWriter;
use crate::shared::error::SummaryError;
use crate::shared::Result;
use async_trait::async_trait;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Environment variable GitHub Actions uses for the step summary file
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// FileSummaryWriter adapter for writing the summary to a file
///
/// This adapter implements the SummaryWriter port for file output.
/// The target file is replaced on every write.
pub struct FileSummaryWriter {
    output_path: PathBuf,
}

impl FileSummaryWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(SummaryError::SummaryWrite {
                    target: self.output_path.display().to_string(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Security validation: reject writing through a symbolic link
    fn validate_not_symlink(&self) -> Result<()> {
        if self.output_path.exists() {
            let metadata = fs::symlink_metadata(&self.output_path).map_err(|e| {
                SummaryError::SummaryWrite {
                    target: self.output_path.display().to_string(),
                    details: format!("Failed to read file metadata: {}", e),
                }
            })?;

            if metadata.is_symlink() {
                return Err(SummaryError::SummaryWrite {
                    target: self.output_path.display().to_string(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl SummaryWriter for FileSummaryWriter {
    async fn write(&self, content: &str) -> Result<()> {
        // Security validations
        self.validate_parent_directory()?;
        self.validate_not_symlink()?;

        // Safe to write now
        tokio::fs::write(&self.output_path, content)
            .await
            .map_err(|e| SummaryError::SummaryWrite {
                target: self.output_path.display().to_string(),
                details: e.to_string(),
            })?;

        eprintln!("✅ Summary written: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutSummaryWriter adapter for writing the summary to stdout
///
/// This adapter implements the SummaryWriter port for stdout output.
pub struct StdoutSummaryWriter;

impl StdoutSummaryWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSummaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummaryWriter for StdoutSummaryWriter {
    async fn write(&self, content: &str) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(content.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        stdout
            .flush()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to flush stdout: {}", e))?;
        Ok(())
    }
}

/// StepSummaryWriter adapter appending to the GitHub Actions step summary
///
/// This adapter implements the SummaryWriter port for the job summary file
/// GitHub Actions exposes via GITHUB_STEP_SUMMARY. Content is appended so
/// summaries from earlier steps are preserved.
#[derive(Debug)]
pub struct StepSummaryWriter {
    summary_path: PathBuf,
}

impl StepSummaryWriter {
    pub fn new(summary_path: PathBuf) -> Self {
        Self { summary_path }
    }

    /// Resolves the step summary file from the environment.
    /// Fails when the variable is unset or empty, which means the process
    /// is not running inside a GitHub Actions job step.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(env::var(STEP_SUMMARY_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(path) if !path.trim().is_empty() => Ok(Self::new(PathBuf::from(path))),
            _ => Err(SummaryError::StepSummaryUnavailable.into()),
        }
    }
}

#[async_trait]
impl SummaryWriter for StepSummaryWriter {
    async fn write(&self, content: &str) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.summary_path)
            .await
            .map_err(|e| SummaryError::SummaryWrite {
                target: self.summary_path.display().to_string(),
                details: e.to_string(),
            })?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| SummaryError::SummaryWrite {
                target: self.summary_path.display().to_string(),
                details: e.to_string(),
            })?;

        file.flush().await.map_err(|e| {
            SummaryError::SummaryWrite {
                target: self.summary_path.display().to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("summary.md");

        let writer = FileSummaryWriter::new(output_path.clone());
        let result = writer.write("# Docker build summary\n").await;

        assert!(result.is_ok());
        let written_content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written_content, "# Docker build summary\n");
    }

    #[tokio::test]
    async fn test_file_writer_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("summary.md");
        fs::write(&output_path, "stale").unwrap();

        let writer = FileSummaryWriter::new(output_path.clone());
        writer.write("fresh").await.unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "fresh");
    }

    #[tokio::test]
    async fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/summary.md");

        let writer = FileSummaryWriter::new(output_path);
        let result = writer.write("content").await;

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target_path = temp_dir.path().join("target.md");
        let link_path = temp_dir.path().join("link.md");
        fs::write(&target_path, "").unwrap();
        std::os::unix::fs::symlink(&target_path, &link_path).unwrap();

        let writer = FileSummaryWriter::new(link_path);
        let result = writer.write("content").await;

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }

    #[tokio::test]
    async fn test_stdout_writer_success() {
        let writer = StdoutSummaryWriter::new();
        // We can't easily capture stdout here, but we can verify it doesn't error
        let result = writer.write("test output\n").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_step_summary_writer_appends() {
        let temp_dir = TempDir::new().unwrap();
        let summary_path = temp_dir.path().join("step_summary.md");

        let writer = StepSummaryWriter::new(summary_path.clone());
        writer.write("first\n").await.unwrap();
        writer.write("second\n").await.unwrap();

        let content = fs::read_to_string(&summary_path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[tokio::test]
    async fn test_step_summary_writer_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let summary_path = temp_dir.path().join("step_summary.md");
        assert!(!summary_path.exists());

        let writer = StepSummaryWriter::new(summary_path.clone());
        writer.write("content\n").await.unwrap();

        assert!(summary_path.exists());
    }

    #[test]
    fn test_step_summary_from_env_value_set() {
        let writer = StepSummaryWriter::from_env_value(Some("/tmp/summary.md".to_string()));
        assert!(writer.is_ok());
    }

    #[test]
    fn test_step_summary_from_env_value_missing() {
        let result = StepSummaryWriter::from_env_value(None);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("GITHUB_STEP_SUMMARY is not set"));
    }

    #[test]
    fn test_step_summary_from_env_value_empty() {
        let result = StepSummaryWriter::from_env_value(Some("   ".to_string()));
        assert!(result.is_err());
    }
}
