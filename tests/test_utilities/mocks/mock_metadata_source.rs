use buildkit_summary::prelude::*;
use std::path::Path;

/// Mock MetadataSource for testing with canned metadata content
pub struct MockMetadataSource {
    content: Option<String>,
    should_fail: bool,
}

impl MockMetadataSource {
    pub fn new(content: String) -> Self {
        Self {
            content: Some(content),
            should_fail: false,
        }
    }

    /// Source that behaves as if no metadata was produced
    pub fn absent() -> Self {
        Self {
            content: None,
            should_fail: false,
        }
    }

    /// Source that fails on every load
    pub fn with_failure() -> Self {
        Self {
            content: None,
            should_fail: true,
        }
    }
}

impl MetadataSource for MockMetadataSource {
    fn load(&self, _path: Option<&Path>) -> Result<Option<String>> {
        if self.should_fail {
            anyhow::bail!("Simulated metadata read failure");
        }
        Ok(self.content.clone())
    }
}
