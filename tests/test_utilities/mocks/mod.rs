/// Mock implementations for testing
mod mock_metadata_source;
mod mock_progress_reporter;
mod mock_summary_writer;

pub use mock_metadata_source::MockMetadataSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_summary_writer::MockSummaryWriter;
