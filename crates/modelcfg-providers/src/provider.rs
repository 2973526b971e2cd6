//! Resolved provider descriptors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::ProviderRegistryEntry;
use crate::model::{Api, ModelDescriptor};

/// A provider that resolution decided to enable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    /// Name of the environment variable holding the credential, unless a
    /// profile supplied its own value. Never the secret read from the
    /// environment.
    pub api_key: String,
    pub base_url: String,
    pub api: Api,
    /// Models copied from the catalog entry.
    pub models: Vec<ModelDescriptor>,
}

impl ProviderDescriptor {
    /// Descriptor carrying only catalog defaults.
    pub fn from_entry(entry: &ProviderRegistryEntry) -> Self {
        Self {
            api_key: entry.env_var.to_string(),
            base_url: entry.base_url.to_string(),
            api: entry.api,
            models: entry.models.to_vec(),
        }
    }
}

/// Enabled providers keyed by provider id. Absent providers are disabled.
pub type ResolvedProviders = BTreeMap<String, ProviderDescriptor>;
