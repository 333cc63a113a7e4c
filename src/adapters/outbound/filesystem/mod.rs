/// Filesystem adapters for file I/O operations
mod metadata_source;
mod summary_writer;

pub use metadata_source::FileMetadataSource;
pub use summary_writer::{FileSummaryWriter, StdoutSummaryWriter, StepSummaryWriter};
