use crate::adapters::outbound::filesystem::{
    FileSummaryWriter, StdoutSummaryWriter, StepSummaryWriter,
};
use crate::ports::outbound::SummaryWriter;
use crate::shared::Result;
use std::path::PathBuf;

/// Summary target enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryTarget {
    Stdout,
    File(PathBuf),
    StepSummary,
}

/// Factory for creating summary writers
///
/// This factory encapsulates the creation logic for different writer implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct WriterFactory;

impl WriterFactory {
    /// Creates a writer instance for the specified target
    ///
    /// # Arguments
    /// * `target` - The output target to create a writer for
    ///
    /// # Returns
    /// A boxed SummaryWriter trait object appropriate for the specified target.
    /// Fails for `SummaryTarget::StepSummary` when GITHUB_STEP_SUMMARY is not
    /// set, so a misconfigured environment is caught before any rendering.
    ///
    /// # Examples
    /// ```
    /// use buildkit_summary::application::factories::{SummaryTarget, WriterFactory};
    ///
    /// let writer = WriterFactory::create(SummaryTarget::Stdout).unwrap();
    /// ```
    pub fn create(target: SummaryTarget) -> Result<Box<dyn SummaryWriter>> {
        match target {
            SummaryTarget::Stdout => Ok(Box::new(StdoutSummaryWriter::new())),
            SummaryTarget::File(path) => Ok(Box::new(FileSummaryWriter::new(path))),
            SummaryTarget::StepSummary => Ok(Box::new(StepSummaryWriter::from_env()?)),
        }
    }
}
