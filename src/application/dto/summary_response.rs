/// SummaryResponse - Internal response DTO from summary generation use case
///
/// This DTO tells the caller whether a document was assembled and how
/// many build information sections it contains, so the caller can decide
/// whether persisting the document makes sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResponse {
    /// Whether a summary document was generated
    pub generated: bool,
    /// Number of build information sections rendered into the document
    pub sections: usize,
}

impl SummaryResponse {
    /// A summary was generated with the given number of sections
    pub fn generated(sections: usize) -> Self {
        Self {
            generated: true,
            sections,
        }
    }

    /// No metadata was available, nothing was generated
    pub fn skipped() -> Self {
        Self {
            generated: false,
            sections: 0,
        }
    }
}
