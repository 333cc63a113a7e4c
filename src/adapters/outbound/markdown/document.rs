use crate::ports::outbound::{DocumentSink, SummaryWriter, TableCell};
use crate::shared::error::SummaryError;
use crate::shared::Result;
use async_trait::async_trait;

/// Maximum Markdown heading depth
const MAX_HEADING_LEVEL: usize = 6;

/// MarkdownDocument adapter for assembling the summary as GitHub-flavored Markdown
///
/// This adapter implements the DocumentSink port. Blocks are accumulated
/// into an in-memory buffer and handed to the configured SummaryWriter
/// exactly once via `persist`.
pub struct MarkdownDocument {
    buffer: String,
    writer: Box<dyn SummaryWriter>,
    persisted: bool,
}

impl MarkdownDocument {
    pub fn new(writer: Box<dyn SummaryWriter>) -> Self {
        Self {
            buffer: String::new(),
            writer,
            persisted: false,
        }
    }

    /// Returns the Markdown accumulated so far
    pub fn content(&self) -> &str {
        &self.buffer
    }

    /// Returns true when no block has been appended yet
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Renders a single table row as a pipe-delimited line
    fn render_table_row(cells: &[TableCell]) -> String {
        let rendered: Vec<String> = cells
            .iter()
            .map(|cell| Self::escape_table_cell(&cell.data))
            .collect();
        format!("| {} |\n", rendered.join(" | "))
    }

    /// Renders the separator line that follows a header row
    fn render_table_separator(columns: usize) -> String {
        let dashes = vec!["---"; columns];
        format!("| {} |\n", dashes.join(" | "))
    }
}

#[async_trait]
impl DocumentSink for MarkdownDocument {
    fn add_heading(&mut self, level: usize, text: &str) {
        let level = level.clamp(1, MAX_HEADING_LEVEL);
        self.buffer.push_str(&"#".repeat(level));
        self.buffer.push(' ');
        self.buffer.push_str(text);
        self.buffer.push_str("\n\n");
    }

    fn add_paragraph(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push_str("\n\n");
    }

    fn add_raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_eol(&mut self) {
        self.buffer.push('\n');
    }

    fn add_link(&mut self, text: &str, url: &str) {
        self.buffer.push_str(&format!("[{}]({})", text, url));
    }

    fn add_list(&mut self, items: &[String], ordered: bool) {
        if items.is_empty() {
            return;
        }
        for (index, item) in items.iter().enumerate() {
            if ordered {
                self.buffer.push_str(&format!("{}. {}\n", index + 1, item));
            } else {
                self.buffer.push_str(&format!("- {}\n", item));
            }
        }
        self.buffer.push('\n');
    }

    fn add_table(&mut self, rows: &[Vec<TableCell>]) {
        let Some(first) = rows.first() else {
            return;
        };

        self.buffer.push_str(&Self::render_table_row(first));

        // A leading all-header row gets the GFM separator line
        if !first.is_empty() && first.iter().all(|cell| cell.header) {
            self.buffer
                .push_str(&Self::render_table_separator(first.len()));
        }

        for row in &rows[1..] {
            self.buffer.push_str(&Self::render_table_row(row));
        }
        self.buffer.push('\n');
    }

    async fn persist(&mut self) -> Result<()> {
        if self.persisted {
            return Err(SummaryError::AlreadyPersisted.into());
        }
        self.persisted = true;
        self.writer.write(&self.buffer).await
    }
}
