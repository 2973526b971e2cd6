//! Implicit provider resolution.
//!
//! A catalog provider is enabled when its API key variable is set to a
//! non-blank value, or when the agent profile has a block naming it. Enabled
//! providers start from catalog defaults (`apiKey` is the variable *name*);
//! profile fields then replace those defaults one by one.

use std::path::PathBuf;

use crate::catalog::{Catalog, ProviderRegistryEntry};
use crate::env::EnvLookup;
use crate::error::Result;
use crate::profile::{Profile, ProviderOverride};
use crate::provider::{ProviderDescriptor, ResolvedProviders};

/// Inputs for [`resolve_implicit_providers`] besides the environment.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Agent directory that may hold a profile file.
    pub agent_dir: PathBuf,
    pub catalog: Catalog,
}

impl ResolveContext {
    /// Context using the built-in catalog.
    pub fn new(agent_dir: impl Into<PathBuf>) -> Self {
        Self {
            agent_dir: agent_dir.into(),
            catalog: Catalog::builtin(),
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }
}

/// Resolve enabled providers from the environment and the agent profile.
///
/// Fails only when the profile carries a malformed override for a known
/// provider; a missing or unreadable profile falls back to environment-only
/// resolution.
pub async fn resolve_implicit_providers(
    context: &ResolveContext,
    env: &dyn EnvLookup,
) -> Result<ResolvedProviders> {
    let profile = Profile::load(&context.agent_dir, &context.catalog).await?;
    Ok(resolve_providers(&context.catalog, env, profile.as_ref()))
}

/// Pure resolution over already-loaded inputs.
pub fn resolve_providers(
    catalog: &Catalog,
    env: &dyn EnvLookup,
    profile: Option<&Profile>,
) -> ResolvedProviders {
    catalog
        .iter()
        .filter_map(|entry| {
            let over = profile.and_then(|profile| profile.get(entry.id));
            resolve_entry(entry, env, over).map(|descriptor| (entry.id.to_string(), descriptor))
        })
        .collect()
}

fn resolve_entry(
    entry: &ProviderRegistryEntry,
    env: &dyn EnvLookup,
    over: Option<&ProviderOverride>,
) -> Option<ProviderDescriptor> {
    let from_env = env.non_empty_var(entry.env_var).is_some();
    if !from_env && over.is_none() {
        return None;
    }

    let mut descriptor = ProviderDescriptor::from_entry(entry);
    if let Some(over) = over {
        apply_override(&mut descriptor, over);
    }

    tracing::debug!(
        provider = entry.id,
        source = source_label(from_env, over.is_some()),
        base_url = %descriptor.base_url,
        api = %descriptor.api,
        "Enabled implicit provider"
    );
    Some(descriptor)
}

fn apply_override(descriptor: &mut ProviderDescriptor, over: &ProviderOverride) {
    if let Some(api_key) = &over.api_key {
        descriptor.api_key = api_key.clone();
    }
    if let Some(base_url) = &over.base_url {
        descriptor.base_url = base_url.clone();
    }
    if let Some(api) = over.api {
        descriptor.api = api;
    }
}

fn source_label(from_env: bool, from_profile: bool) -> &'static str {
    match (from_env, from_profile) {
        (true, true) => "env+profile",
        (true, false) => "env",
        _ => "profile",
    }
}
