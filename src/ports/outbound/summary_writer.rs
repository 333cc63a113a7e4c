use crate::shared::Result;
use async_trait::async_trait;

/// SummaryWriter port for the terminal write of the assembled document
///
/// This port abstracts the output destination (stdout, file, CI job
/// summary) where the finished summary document lands.
///
/// # Async Support
/// The write is async so destinations can flush without blocking.
/// Implementations must be `Send + Sync` so a boxed writer can live
/// inside a document that is persisted across an await point.
#[async_trait]
pub trait SummaryWriter: Send + Sync {
    /// Writes the finished document content to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - Disk space is insufficient
    async fn write(&self, content: &str) -> Result<()>;
}
