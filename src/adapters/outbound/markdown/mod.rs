/// Markdown adapter assembling the summary document
mod document;

pub use document::MarkdownDocument;
