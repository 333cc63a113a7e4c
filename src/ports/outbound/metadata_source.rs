use crate::shared::Result;
use std::path::Path;

/// MetadataSource port for acquiring the raw build metadata text
///
/// This port abstracts where the metadata document written by
/// `docker buildx build --metadata-file` comes from.
pub trait MetadataSource {
    /// Loads the metadata text.
    ///
    /// # Arguments
    /// * `path` - Location of the metadata file, None when the build
    ///   produced no metadata
    ///
    /// # Returns
    /// The raw metadata text, or None when there is nothing to load.
    /// An absent document is not an error; an unreadable one is.
    ///
    /// # Errors
    /// Returns an error if the metadata exists but cannot be read.
    fn load(&self, path: Option<&Path>) -> Result<Option<String>>;
}
