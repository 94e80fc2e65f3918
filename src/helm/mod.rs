pub mod manifest;
pub mod render;

pub use manifest::{ManifestList, OutputFormat, generate_manifests};
pub use render::{DEFAULT_HELM_BIN, HelmRenderer, RenderRequest};
