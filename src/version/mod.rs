//! Version lifecycle layer
//!
//! Turns the release train and each release's build metadata into a publishing
//! policy per version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Train    │────▶│ Prerelease  │────▶│   Policy    │
//! │(versions.js)│     │ (metadata)  │     │ (resolver)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       ▲
//!        ▼                                       │
//! ┌─────────────┐                                │
//! │   Current   │────────────────────────────────┘
//! │  (derive)   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`train`]: Ordered, validated list of released versions
//! - [`prerelease`]: Prerelease classification from hardcoded build versions
//! - [`current`]: Derivation of the in-development version
//! - [`policy`]: Label, banner, indexability and default version resolution
//! - [`error`]: Error types for train loading and version parsing

pub mod current;
pub mod error;
pub mod policy;
pub mod prerelease;
pub mod train;

pub use current::CurrentVersion;
pub use error::VersionError;
pub use policy::{
    BannerLevel, ClassifiedRelease, DefaultVersion, NoDefaultReason, ResolvedPolicy,
    VersionPolicyRecord,
};
pub use prerelease::PrereleaseClassifier;
pub use train::ReleaseTrain;
