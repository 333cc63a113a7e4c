use crate::buildinfo::{BuildInfoEntry, BuildSource, ClassifiedAttrs};
use crate::ports::outbound::{DocumentSink, TableCell};

/// Fixed explanatory paragraph opening every build information section
const SECTION_INTRO: &str = "Build dependencies have been generated when your image has been built. These dependencies include versions of used images, git repositories and HTTP URLs as well as build request attributes as described below.";

/// BuildKit documentation on reproducible builds
const BUILD_REPRO_DOCS_URL: &str =
    "https://github.com/moby/buildkit/blob/master/docs/build-repro.md";

/// SectionRenderer - Renders one build information entry into the document
///
/// Each entry becomes a level-2 section: heading, explanatory paragraph,
/// the classified request attributes and the sources table. All interpolated
/// metadata values are wrapped as inline code so they can never be mistaken
/// for markup.
pub struct SectionRenderer;

impl SectionRenderer {
    /// Appends one build information section to the document
    pub fn render(document: &mut dyn DocumentSink, entry: &BuildInfoEntry) {
        Self::render_heading(document, entry.platform.as_deref());
        Self::render_intro(document);
        Self::render_attributes(document, entry);
        Self::render_sources(document, &entry.info.sources);
    }

    /// Renders the section heading, suffixed with the platform when present
    fn render_heading(document: &mut dyn DocumentSink, platform: Option<&str>) {
        match platform {
            Some(platform) => document.add_heading(
                2,
                &format!("Docker build information ({})", Self::code_span(platform)),
            ),
            None => document.add_heading(2, "Docker build information"),
        }
    }

    /// Renders the fixed explanatory paragraph and documentation link
    fn render_intro(document: &mut dyn DocumentSink) {
        document.add_paragraph(SECTION_INTRO);
        document.add_raw("More information: ");
        document.add_link(BUILD_REPRO_DOCS_URL, BUILD_REPRO_DOCS_URL);
        document.add_eol();
        document.add_eol();
    }

    /// Renders the request attributes sub-section
    ///
    /// The heading appears whenever `attrs` is present in the record, even
    /// when the mapping is empty. Empty categories are omitted entirely.
    fn render_attributes(document: &mut dyn DocumentSink, entry: &BuildInfoEntry) {
        let Some(attrs) = &entry.info.attrs else {
            return;
        };

        document.add_heading(3, "Request attributes");

        let classified = ClassifiedAttrs::classify(attrs);
        Self::render_attr_list(document, "Common attributes", &classified.common);
        Self::render_attr_list(document, "Arguments", &classified.args);
        Self::render_attr_list(document, "Labels", &classified.labels);
    }

    /// Renders one attribute category as a level-4 heading plus unordered list
    fn render_attr_list(document: &mut dyn DocumentSink, title: &str, attrs: &[(&str, &str)]) {
        if attrs.is_empty() {
            return;
        }

        document.add_heading(4, title);
        let items: Vec<String> = attrs
            .iter()
            .map(|(name, value)| Self::code_span(&format!("{}={}", name, value)))
            .collect();
        document.add_list(&items, false);
    }

    /// Renders the sources sub-section as a Type/Ref table
    ///
    /// The pinned digest of each source is deliberately not rendered.
    fn render_sources(document: &mut dyn DocumentSink, sources: &[BuildSource]) {
        if sources.is_empty() {
            return;
        }

        document.add_heading(3, "Sources");

        let mut rows = vec![vec![TableCell::header("Type"), TableCell::header("Ref")]];
        for source in sources {
            rows.push(vec![
                TableCell::data(source.source_type.as_str()),
                TableCell::data(Self::code_span(&source.reference)),
            ]);
        }
        document.add_table(&rows);
    }

    /// Wraps text in an inline code span that survives arbitrary content.
    /// The backtick fence is made longer than any backtick run inside the
    /// text, and newlines are flattened so the span stays on one line.
    fn code_span(text: &str) -> String {
        let flattened = text.replace('\n', " ");

        let mut longest_run = 0;
        let mut current_run = 0;
        for ch in flattened.chars() {
            if ch == '`' {
                current_run += 1;
                longest_run = longest_run.max(current_run);
            } else {
                current_run = 0;
            }
        }

        let fence = "`".repeat(longest_run + 1);
        if flattened.starts_with('`') || flattened.ends_with('`') {
            format!("{} {} {}", fence, flattened, fence)
        } else {
            format!("{}{}{}", fence, flattened, fence)
        }
    }
}
