//! Version lifecycle classifier for multi-version documentation builds.
//!
//! Given the release train (`versions.json`, newest first) and the build
//! metadata recorded for each release, decides how every version of the docs is
//! published: display label, banner, search indexability and route path, plus
//! the version the site lands on. The result is emitted as the options of the
//! site generator's versioned docs plugin.
//!
//! - [`config`]: layout and resolver configuration, build flags
//! - [`metadata`]: per-version `help-all.json` reading
//! - [`version`]: train, prerelease classification, current version, policy
//! - [`manifest`]: publish manifest assembly and the end-to-end pipeline
//! - [`logging`]: tracing subscriber setup for the CLI

pub mod config;
pub mod logging;
pub mod manifest;
pub mod metadata;
pub mod version;
