//! Metadata layer
//! - types.rs: typed view of a version's `help-all.json`
//! - reader.rs: MetadataSource trait and filesystem reader
//! - error.rs: MetadataError

pub mod error;
pub mod reader;
pub mod types;

pub use error::MetadataError;
pub use reader::{FsMetadataReader, MetadataSource};
pub use types::{HelpDocument, OptionHelp, Rank, RankedValue, ScopeHelp, ValueHistory};
