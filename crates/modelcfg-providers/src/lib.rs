//! # modelcfg-providers
//!
//! Decides which model providers are implicitly enabled for an agent.
//!
//! A provider from the static [`Catalog`] is enabled when its API key
//! environment variable (e.g. `NVIDIA_API_KEY`) is set, or when the agent
//! directory's `models.json` profile names it. The result maps provider ids to
//! [`ProviderDescriptor`]s carrying the credential variable name, base URL,
//! protocol and the catalog's model list.
//!
//! ```ignore
//! use modelcfg_providers::{ProcessEnv, ResolveContext, resolve_implicit_providers};
//!
//! let context = ResolveContext::new("/home/me/.local/share/modelcfg/agent");
//! let providers = resolve_implicit_providers(&context, &ProcessEnv).await?;
//!
//! if let Some(nvidia) = providers.get("nvidia") {
//!     // `api_key` is "NVIDIA_API_KEY"; read the variable to get the secret.
//!     println!("{} via {}", nvidia.base_url, nvidia.api);
//! }
//! ```

pub mod catalog;
pub mod env;
pub mod error;
pub mod model;
pub mod profile;
pub mod provider;
pub mod resolve;

pub use catalog::{BUILTIN_PROVIDERS, Catalog, ProviderRegistryEntry, env_var_name};
pub use env::{EnvLookup, ProcessEnv, env_from};
pub use error::{Error, Result};
pub use model::{Api, InputModality, ModelCost, ModelDescriptor};
pub use profile::{PROFILE_FILENAME, Profile, ProviderOverride, profile_path};
pub use provider::{ProviderDescriptor, ResolvedProviders};
pub use resolve::{ResolveContext, resolve_implicit_providers, resolve_providers};
