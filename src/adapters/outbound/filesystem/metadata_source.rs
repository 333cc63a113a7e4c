use crate::ports::outbound::MetadataSource;
use crate::shared::error::SummaryError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileMetadataSource adapter for reading build metadata from the file system
///
/// This adapter implements the MetadataSource port. When no path is
/// configured the source reports the metadata as absent instead of failing.
pub struct FileMetadataSource;

impl FileMetadataSource {
    pub fn new() -> Self {
        Self
    }

    /// Safely read the metadata file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata =
            fs::symlink_metadata(path).map_err(|e| SummaryError::MetadataRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        // Security check: Reject symbolic links
        if metadata.is_symlink() {
            return Err(SummaryError::MetadataRead {
                path: path.to_path_buf(),
                details: "Security: Metadata path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        // Security check: Ensure it's a regular file
        if !metadata.is_file() {
            return Err(SummaryError::MetadataRead {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        // Security check: File size limit (prevent DoS via huge files)
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(SummaryError::MetadataRead {
                path: path.to_path_buf(),
                details: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_FILE_SIZE
                ),
            }
            .into());
        }

        // Safe to read the file now
        fs::read_to_string(path).map_err(|e| {
            SummaryError::MetadataRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileMetadataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for FileMetadataSource {
    fn load(&self, path: Option<&Path>) -> Result<Option<String>> {
        match path {
            Some(path) => self.safe_read_file(path).map(Some),
            None => Ok(None),
        }
    }
}
