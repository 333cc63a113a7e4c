/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, CI job
/// summary surfaces).
pub mod document_sink;
pub mod metadata_source;
pub mod progress_reporter;
pub mod summary_writer;

pub use document_sink::{DocumentSink, TableCell};
pub use metadata_source::MetadataSource;
pub use progress_reporter::ProgressReporter;
pub use summary_writer::SummaryWriter;
