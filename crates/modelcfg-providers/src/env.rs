//! Environment snapshots consumed by the resolver.

use std::collections::{BTreeMap, HashMap};

/// Read-only view of environment variables.
///
/// The resolver only ever asks for variable names declared in the catalog.
pub trait EnvLookup: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the value when it is set and not blank.
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.trim().is_empty())
    }
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Blanket impl: any `Fn(&str) -> Option<String>` is an environment.
impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn var(&self, name: &str) -> Option<String> {
        (self)(name)
    }
}

/// Build a map-backed environment from `(name, value)` pairs.
pub fn env_from<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}
