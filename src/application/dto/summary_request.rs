use std::path::PathBuf;

/// SummaryRequest - Internal request DTO for summary generation use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external CLI surface.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    /// Path to the build metadata file, when one was provided.
    /// Absent means no metadata was produced for this build.
    pub metadata_file: Option<PathBuf>,
}

impl SummaryRequest {
    pub fn new(metadata_file: Option<PathBuf>) -> Self {
        Self { metadata_file }
    }
}
