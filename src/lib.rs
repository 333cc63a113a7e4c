//! buildkit-summary - Markdown build summaries from BuildKit metadata
//!
//! This library renders the build metadata emitted by `docker buildx build
//! --metadata-file` into a human-readable Markdown report covering request
//! attributes, build arguments, labels and source dependencies, following
//! hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`buildinfo`): Build metadata model and classification rules
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use buildkit_summary::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let metadata_source = FileMetadataSource::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateSummaryUseCase::new(metadata_source, progress_reporter);
//!
//! // Render into a Markdown document backed by stdout
//! let writer = WriterFactory::create(SummaryTarget::Stdout)?;
//! let mut document = MarkdownDocument::new(writer);
//!
//! let request = SummaryRequest::new(Some(PathBuf::from("metadata.json")));
//! let response = use_case.execute(&request, &mut document)?;
//!
//! if response.generated {
//!     document.persist().await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod buildinfo;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileMetadataSource, FileSummaryWriter, StdoutSummaryWriter, StepSummaryWriter,
    };
    pub use crate::adapters::outbound::markdown::MarkdownDocument;
    pub use crate::application::dto::{SummaryRequest, SummaryResponse};
    pub use crate::application::factories::{SummaryTarget, WriterFactory};
    pub use crate::application::use_cases::GenerateSummaryUseCase;
    pub use crate::buildinfo::{BuildInfo, BuildInfoEntry, BuildMetadata, BuildSource};
    pub use crate::ports::outbound::{
        DocumentSink, MetadataSource, ProgressReporter, SummaryWriter, TableCell,
    };
    pub use crate::shared::Result;
}
