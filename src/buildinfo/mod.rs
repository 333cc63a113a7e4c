/// Domain layer - typed model of BuildKit build metadata
///
/// The model is read-only after parsing: the metadata document is an
/// insertion-ordered mapping, and each buildinfo record under it carries
/// the build frontend, the request attributes and the source dependencies
/// that went into an image build.
mod metadata;
mod record;

pub use metadata::{BuildInfoEntry, BuildMetadata, BUILDINFO_KEY};
pub use record::{BuildInfo, BuildSource, ClassifiedAttrs, BUILD_ARG_PREFIX, LABEL_PREFIX};
