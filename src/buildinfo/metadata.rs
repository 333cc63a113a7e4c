use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::buildinfo::record::BuildInfo;
use crate::shared::error::SummaryError;
use crate::shared::Result;

/// Metadata key carrying a buildinfo record. Multi-platform builds emit
/// one key per platform, suffixed with `/<platform>`.
pub const BUILDINFO_KEY: &str = "containerimage.buildinfo";

/// Parsed build metadata document with keys in document order.
///
/// The document is the JSON object written by
/// `docker buildx build --metadata-file`; besides buildinfo it carries
/// keys this tool does not interpret (digests, image names, ...).
#[derive(Debug, Clone)]
pub struct BuildMetadata {
    entries: IndexMap<String, Value>,
}

/// One buildinfo record extracted from the metadata document.
#[derive(Debug, Clone)]
pub struct BuildInfoEntry {
    /// Platform suffix of the metadata key, None for single-platform builds
    pub platform: Option<String>,
    /// The parsed record, empty when `degraded`
    pub info: BuildInfo,
    /// True when the key's value did not deserialize as a buildinfo record
    pub degraded: bool,
}

impl BuildMetadata {
    /// Parses the metadata text.
    ///
    /// # Errors
    /// Returns `SummaryError::MetadataParse` when the text is not valid
    /// JSON or its top level is not an object.
    pub fn parse(text: &str) -> Result<Self> {
        let entries: IndexMap<String, Value> =
            serde_json::from_str(text).map_err(|e| SummaryError::MetadataParse {
                details: e.to_string(),
            })?;
        Ok(Self { entries })
    }

    /// Extracts every buildinfo record, in document key order.
    ///
    /// Keys that are not buildinfo keys are skipped. A buildinfo key whose
    /// value is malformed yields a degraded entry with an empty record
    /// rather than failing the whole document.
    pub fn buildinfo_entries(&self) -> Vec<BuildInfoEntry> {
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                let platform = split_platform(key)?;
                let entry = match BuildInfo::deserialize(value) {
                    Ok(info) => BuildInfoEntry {
                        platform,
                        info,
                        degraded: false,
                    },
                    Err(_) => BuildInfoEntry {
                        platform,
                        info: BuildInfo::default(),
                        degraded: true,
                    },
                };
                Some(entry)
            })
            .collect()
    }
}

/// Matches a metadata key against the buildinfo key.
///
/// Returns None for non-buildinfo keys, Some(None) for the bare key and
/// Some(platform) for a `/<platform>` suffixed key. The platform is
/// everything after the first separator, so `linux/amd64` stays intact.
fn split_platform(key: &str) -> Option<Option<String>> {
    let rest = key.strip_prefix(BUILDINFO_KEY)?;
    if rest.is_empty() {
        Some(None)
    } else {
        rest.strip_prefix('/')
            .map(|platform| Some(platform.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let metadata = BuildMetadata::parse(r#"{"containerimage.digest": "sha256:abc"}"#).unwrap();
        assert!(metadata.buildinfo_entries().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = BuildMetadata::parse("not json {{{");
        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse build metadata"));
    }

    #[test]
    fn test_parse_non_object_top_level() {
        let result = BuildMetadata::parse(r#"["containerimage.buildinfo"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entries_single_platform() {
        let metadata = BuildMetadata::parse(
            r#"{"containerimage.buildinfo": {"frontend": "dockerfile.v0"}}"#,
        )
        .unwrap();

        let entries = metadata.buildinfo_entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].platform.is_none());
        assert!(!entries[0].degraded);
        assert_eq!(entries[0].info.frontend, "dockerfile.v0");
    }

    #[test]
    fn test_entries_multi_platform_in_document_order() {
        let metadata = BuildMetadata::parse(
            r#"{
                "containerimage.buildinfo/linux/arm64": {"frontend": "dockerfile.v0"},
                "containerimage.digest": "sha256:abc",
                "containerimage.buildinfo/linux/amd64": {"frontend": "dockerfile.v0"}
            }"#,
        )
        .unwrap();

        let entries = metadata.buildinfo_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].platform.as_deref(), Some("linux/arm64"));
        assert_eq!(entries[1].platform.as_deref(), Some("linux/amd64"));
    }

    #[test]
    fn test_entries_ignores_lookalike_keys() {
        let metadata = BuildMetadata::parse(
            r#"{
                "containerimage.buildinfoX": {"frontend": "dockerfile.v0"},
                "containerimage.buildinfo.extra": {"frontend": "dockerfile.v0"}
            }"#,
        )
        .unwrap();

        assert!(metadata.buildinfo_entries().is_empty());
    }

    #[test]
    fn test_entries_malformed_value_degrades() {
        let metadata = BuildMetadata::parse(
            r#"{
                "containerimage.buildinfo/linux/amd64": "not a record",
                "containerimage.buildinfo/linux/arm64": {"frontend": "dockerfile.v0"}
            }"#,
        )
        .unwrap();

        let entries = metadata.buildinfo_entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].degraded);
        assert_eq!(entries[0].info.frontend, "");
        assert!(entries[0].info.attrs.is_none());
        assert!(!entries[1].degraded);
        assert_eq!(entries[1].info.frontend, "dockerfile.v0");
    }

    #[test]
    fn test_split_platform_bare_key() {
        assert_eq!(split_platform("containerimage.buildinfo"), Some(None));
    }

    #[test]
    fn test_split_platform_with_platform() {
        assert_eq!(
            split_platform("containerimage.buildinfo/linux/amd64"),
            Some(Some("linux/amd64".to_string()))
        );
    }

    #[test]
    fn test_split_platform_trailing_separator_only() {
        assert_eq!(
            split_platform("containerimage.buildinfo/"),
            Some(Some(String::new()))
        );
    }

    #[test]
    fn test_split_platform_rejects_other_keys() {
        assert_eq!(split_platform("containerimage.digest"), None);
        assert_eq!(split_platform("containerimage.buildinfoX"), None);
        assert_eq!(split_platform("buildx.build.ref"), None);
    }
}
