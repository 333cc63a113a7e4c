use crate::application::dto::{SummaryRequest, SummaryResponse};
use crate::buildinfo::{BuildInfoEntry, BuildMetadata};
use crate::ports::outbound::{DocumentSink, MetadataSource, ProgressReporter};
use crate::shared::Result;

mod section;

use section::SectionRenderer;

/// GenerateSummaryUseCase - Core use case for build summary generation
///
/// This use case orchestrates the summary workflow using generic
/// dependency injection for all infrastructure dependencies. Rendering
/// goes through the DocumentSink port, so the workflow never touches a
/// concrete markup format.
///
/// # Type Parameters
/// * `MS` - MetadataSource implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSummaryUseCase<MS, PR> {
    metadata_source: MS,
    progress_reporter: PR,
}

impl<MS, PR> GenerateSummaryUseCase<MS, PR>
where
    MS: MetadataSource,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSummaryUseCase with injected dependencies
    pub fn new(metadata_source: MS, progress_reporter: PR) -> Self {
        Self {
            metadata_source,
            progress_reporter,
        }
    }

    /// Executes the summary generation use case
    ///
    /// # Arguments
    /// * `request` - Summary request naming the metadata file, if any
    /// * `document` - Document the summary is appended to
    ///
    /// # Returns
    /// SummaryResponse telling whether a summary was generated and how many
    /// build information sections it contains. When no metadata is available
    /// the document is left untouched and nothing is generated.
    pub fn execute(
        &self,
        request: &SummaryRequest,
        document: &mut dyn DocumentSink,
    ) -> Result<SummaryResponse> {
        // Step 1: Load the raw metadata text
        let Some(raw_metadata) = self.load_and_report_metadata(request)? else {
            return Ok(self.build_skipped_response());
        };

        // Step 2: Parse the metadata mapping
        let metadata = BuildMetadata::parse(&raw_metadata)?;

        // Step 3: Collect build information entries in key order
        let entries = metadata.buildinfo_entries();

        // Step 4: Render the summary document
        self.render_summary(&entries, document);

        // Step 5: Build and return response
        Ok(self.build_generated_response(entries.len()))
    }

    /// Loads the metadata text, reporting progress
    ///
    /// Returns None when no metadata is available, which covers both an
    /// absent file path and an empty metadata document.
    fn load_and_report_metadata(&self, request: &SummaryRequest) -> Result<Option<String>> {
        if let Some(path) = &request.metadata_file {
            self.progress_reporter.report(&format!(
                "📖 Loading build metadata from: {}",
                path.display()
            ));
        }

        let raw_metadata = self
            .metadata_source
            .load(request.metadata_file.as_deref())?;

        match raw_metadata {
            Some(text) if !text.trim().is_empty() => Ok(Some(text)),
            _ => Ok(None),
        }
    }

    /// Builds a response for the no-metadata path
    fn build_skipped_response(&self) -> SummaryResponse {
        self.progress_reporter
            .report("⏭️  No build metadata found, skipping summary");
        SummaryResponse::skipped()
    }

    /// Renders the document title and one section per build information entry
    ///
    /// # Arguments
    /// * `entries` - Build information entries in metadata key order
    /// * `document` - Document the sections are appended to
    fn render_summary(&self, entries: &[BuildInfoEntry], document: &mut dyn DocumentSink) {
        document.add_heading(1, "Docker build summary");

        let total = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            let platform_label = entry.platform.as_deref().unwrap_or("default");
            self.progress_reporter
                .report_progress(index + 1, total, Some(platform_label));

            if entry.degraded {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Build information for '{}' is malformed, rendering what could be decoded",
                    platform_label
                ));
            }

            SectionRenderer::render(document, entry);
        }
    }

    /// Builds the final summary response, reporting completion
    fn build_generated_response(&self, sections: usize) -> SummaryResponse {
        self.progress_reporter.report_completion(&format!(
            "✅ Build summary generated: {} section(s)",
            sections
        ));
        SummaryResponse::generated(sections)
    }
}
