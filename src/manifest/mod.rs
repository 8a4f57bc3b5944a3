//! Publish manifest layer
//! - emitter.rs: PublishManifest assembly and plugin-shaped rendering
//! - builder.rs: end-to-end pipeline from train and metadata to manifest

pub mod builder;
pub mod emitter;

pub use builder::{build_manifest, classify_train};
pub use emitter::{ManifestDocument, PluginOptions, PluginVersion, PublishManifest};
