mod cli;

use buildkit_summary::adapters::outbound::console::StderrProgressReporter;
use buildkit_summary::adapters::outbound::filesystem::FileMetadataSource;
use buildkit_summary::adapters::outbound::markdown::MarkdownDocument;
use buildkit_summary::application::dto::SummaryRequest;
use buildkit_summary::application::factories::WriterFactory;
use buildkit_summary::application::use_cases::GenerateSummaryUseCase;
use buildkit_summary::ports::outbound::DocumentSink;
use buildkit_summary::shared::error::{ExitCode, SummaryError};
use buildkit_summary::shared::Result;
use cli::Args;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Honor the environment opt-out before doing any work
    if cli::summary_disabled(std::env::var(cli::DISABLE_ENV).ok().as_deref()) {
        eprintln!(
            "⏭️  Build summary disabled via {}, skipping",
            cli::DISABLE_ENV
        );
        return Ok(());
    }

    // Validate the metadata file when one was given
    if let Some(path) = &args.metadata_file {
        validate_metadata_path(path)?;
    }

    // Create adapters (Dependency Injection)
    let metadata_source = FileMetadataSource::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateSummaryUseCase::new(metadata_source, progress_reporter);

    // Create the document for the selected output target
    let writer = WriterFactory::create(args.summary_target())?;
    let mut document = MarkdownDocument::new(writer);

    // Execute use case
    let request = SummaryRequest::new(args.metadata_file.clone());
    let response = use_case.execute(&request, &mut document)?;

    // Persist only when a summary was generated
    if response.generated {
        document.persist().await?;
    }

    Ok(())
}

fn validate_metadata_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SummaryError::MetadataRead {
            path: path.to_path_buf(),
            details: "File does not exist".to_string(),
        }
        .into());
    }

    if !path.is_file() {
        return Err(SummaryError::MetadataRead {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    Ok(())
}
