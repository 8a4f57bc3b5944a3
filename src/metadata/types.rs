//! Typed view of a version's `help-all.json` build metadata
//!
//! Only the fields the classifier reads are modelled; everything else in the
//! document is ignored during deserialization.

use std::collections::HashMap;

use serde::Deserialize;

/// Scope name of the global options
pub const ROOT_SCOPE: &str = "";

/// Per-version build metadata, keyed by configuration scope
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HelpDocument {
    pub scope_to_help_info: HashMap<String, ScopeHelp>,
}

impl HelpDocument {
    /// Help for the global scope, if the document carries one
    pub fn root_scope(&self) -> Option<&ScopeHelp> {
        self.scope_to_help_info.get(ROOT_SCOPE)
    }
}

/// Options of one scope, grouped by tier
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScopeHelp {
    pub advanced: Vec<OptionHelp>,
}

impl ScopeHelp {
    /// Find an advanced option by its configuration key
    pub fn advanced_option(&self, config_key: &str) -> Option<&OptionHelp> {
        self.advanced.iter().find(|help| help.config_key == config_key)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OptionHelp {
    pub config_key: String,
    #[serde(default)]
    pub value_history: Option<ValueHistory>,
}

impl OptionHelp {
    /// Ranked values carrying the given provenance
    pub fn values_ranked(&self, rank: Rank) -> Vec<&RankedValue> {
        self.value_history
            .iter()
            .flat_map(|history| history.ranked_values.iter())
            .filter(|value| value.rank == rank)
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ValueHistory {
    pub ranked_values: Vec<RankedValue>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RankedValue {
    pub rank: Rank,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Where a configuration value came from, lowest precedence first
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    None,
    /// Baked into the build
    Hardcoded,
    ConfigDefault,
    Config,
    Environment,
    Flag,
    #[serde(other)]
    Other,
}
