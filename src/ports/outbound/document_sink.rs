use crate::shared::Result;
use async_trait::async_trait;

/// A single cell of a document table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub data: String,
    pub header: bool,
}

impl TableCell {
    /// Creates a header cell
    pub fn header(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            header: true,
        }
    }

    /// Creates a plain data cell
    pub fn data(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            header: false,
        }
    }
}

/// DocumentSink port for assembling and persisting the summary document
///
/// The append operations accumulate structured content in place; `persist`
/// hands the finished document to its destination. Appends never perform
/// I/O, so a report can be assembled and discarded without side effects.
///
/// # Async Support
/// Only `persist` is async: the terminal write is the single suspension
/// point of a generation run. Implementations must be `Send`.
#[async_trait]
pub trait DocumentSink: Send {
    /// Appends a heading at the given level (clamped to 1..=6)
    fn add_heading(&mut self, level: usize, text: &str);

    /// Appends a paragraph followed by a blank line
    fn add_paragraph(&mut self, text: &str);

    /// Appends text verbatim
    fn add_raw(&mut self, text: &str);

    /// Appends a line break
    fn add_eol(&mut self);

    /// Appends an inline link
    fn add_link(&mut self, text: &str, url: &str);

    /// Appends a list, ordered or unordered
    fn add_list(&mut self, items: &[String], ordered: bool);

    /// Appends a table; a leading all-header row becomes the table header
    fn add_table(&mut self, rows: &[Vec<TableCell>]);

    /// Writes the assembled document to its destination
    ///
    /// # Errors
    /// Returns an error if the destination rejects the write, or when the
    /// document was already persisted. Persisting happens at most once.
    async fn persist(&mut self) -> Result<()>;
}
