use indexmap::IndexMap;
use serde::Deserialize;

/// Attribute names carrying build arguments use this prefix.
pub const BUILD_ARG_PREFIX: &str = "build-arg:";

/// Attribute names carrying image labels use this prefix.
pub const LABEL_PREFIX: &str = "label:";

/// One buildinfo record as emitted by BuildKit.
///
/// Every field is optional in the wire format; missing fields default so
/// that partially populated records still render. `attrs` distinguishes
/// an absent map from a present-but-empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildInfo {
    /// Frontend that produced the build (e.g. `dockerfile.v0`)
    #[serde(default)]
    pub frontend: String,
    /// Build request attributes in document order, None when absent
    #[serde(default)]
    pub attrs: Option<IndexMap<String, String>>,
    /// Source dependencies resolved during the build
    #[serde(default)]
    pub sources: Vec<BuildSource>,
}

/// A source dependency of the build: an image, git repository or HTTP URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildSource {
    /// Source kind (`docker-image`, `git`, `http`)
    #[serde(rename = "type", default)]
    pub source_type: String,
    /// Reference as requested (image ref, repository URL, ...)
    #[serde(rename = "ref", default)]
    pub reference: String,
    /// Resolved content pin (digest or commit)
    #[serde(default)]
    pub pin: String,
}

/// Request attributes split by category, borrowing from the attrs map.
///
/// Within each category the attrs map order is preserved.
#[derive(Debug, Default)]
pub struct ClassifiedAttrs<'a> {
    /// Attributes without a recognized prefix
    pub common: Vec<(&'a str, &'a str)>,
    /// `build-arg:` attributes, prefix stripped
    pub args: Vec<(&'a str, &'a str)>,
    /// `label:` attributes, prefix stripped
    pub labels: Vec<(&'a str, &'a str)>,
}

impl<'a> ClassifiedAttrs<'a> {
    pub fn classify(attrs: &'a IndexMap<String, String>) -> Self {
        let mut classified = Self::default();
        for (name, value) in attrs {
            if let Some(arg) = name.strip_prefix(BUILD_ARG_PREFIX) {
                classified.args.push((arg, value));
            } else if let Some(label) = name.strip_prefix(LABEL_PREFIX) {
                classified.labels.push((label, value));
            } else {
                classified.common.push((name, value));
            }
        }
        classified
    }
}
