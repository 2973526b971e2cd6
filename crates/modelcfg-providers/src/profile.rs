//! Per-provider overrides read from the agent directory.
//!
//! The profile lives at `<agent_dir>/models.json`:
//!
//! ```json
//! {
//!   "providers": {
//!     "nvidia": { "baseUrl": "https://nim.internal/v1", "apiKey": "NIM_TOKEN" }
//!   }
//! }
//! ```
//!
//! A missing, unreadable or unparseable file means "no profile". A block for a
//! known provider whose fields have the wrong type is an error, so operator
//! mistakes are not silently replaced by defaults.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::model::Api;

/// File name of the profile inside an agent directory.
pub const PROFILE_FILENAME: &str = "models.json";

/// Location of the profile file for an agent directory.
pub fn profile_path(agent_dir: &Path) -> PathBuf {
    agent_dir.join(PROFILE_FILENAME)
}

/// Explicit configuration for one provider. Unset fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderOverride {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub api: Option<Api>,
}

/// Validated overrides for providers known to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    providers: BTreeMap<String, ProviderOverride>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the override for a provider.
    pub fn insert(&mut self, provider_id: impl Into<String>, over: ProviderOverride) {
        self.providers.insert(provider_id.into(), over);
    }

    pub fn get(&self, provider_id: &str) -> Option<&ProviderOverride> {
        self.providers.get(provider_id)
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Parse profile JSON against a catalog.
    ///
    /// Returns `Ok(None)` when the text is not a usable profile document.
    /// Blocks naming unknown providers are dropped.
    pub fn parse(json: &str, catalog: &Catalog) -> Result<Option<Self>> {
        let document: Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unparseable provider profile");
                return Ok(None);
            }
        };

        if !document.is_object() {
            tracing::warn!("Ignoring provider profile: top level is not an object");
            return Ok(None);
        }
        let Some(blocks) = document.get("providers") else {
            return Ok(Some(Self::new()));
        };
        let Some(blocks) = blocks.as_object() else {
            tracing::warn!("Ignoring provider profile: 'providers' is not an object");
            return Ok(None);
        };

        let mut profile = Self::new();
        for (provider_id, block) in blocks {
            if !catalog.contains(provider_id) {
                tracing::debug!(provider = %provider_id, "Ignoring override for unknown provider");
                continue;
            }
            let over = parse_override(provider_id, block)?;
            profile.insert(provider_id.clone(), over);
        }
        Ok(Some(profile))
    }

    /// Read and parse the profile from an agent directory.
    ///
    /// Read failures of any kind degrade to `Ok(None)`; only invalid overrides
    /// for known providers are reported.
    pub async fn load(agent_dir: &Path, catalog: &Catalog) -> Result<Option<Self>> {
        let path = profile_path(agent_dir);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No provider profile");
                return Ok(None);
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Could not read provider profile, continuing without it"
                );
                return Ok(None);
            }
        };
        Self::parse(&text, catalog)
    }
}

fn parse_override(provider_id: &str, block: &Value) -> Result<ProviderOverride> {
    let Some(fields) = block.as_object() else {
        return Err(Error::invalid_override(
            provider_id,
            format!("providers.{provider_id}"),
            format!("expected an object, found {}", type_name(block)),
        ));
    };

    let api = match string_field(provider_id, fields, "api")? {
        Some(raw) => Some(
            raw.parse::<Api>()
                .map_err(|reason| Error::invalid_override(provider_id, "api", reason))?,
        ),
        None => None,
    };

    Ok(ProviderOverride {
        api_key: string_field(provider_id, fields, "apiKey")?,
        base_url: string_field(provider_id, fields, "baseUrl")?,
        api,
    })
}

/// Read an optional, non-empty string field. `null` counts as unset.
fn string_field(
    provider_id: &str,
    fields: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.trim().is_empty() => Err(Error::invalid_override(
            provider_id,
            field,
            "must not be empty",
        )),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(Error::invalid_override(
            provider_id,
            field,
            format!("expected a string, found {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Option<Profile>> {
        Profile::parse(json, &Catalog::builtin())
    }

    fn invalid_field(err: Error) -> (String, String) {
        let Error::InvalidOverride {
            provider, field, ..
        } = err;
        (provider, field)
    }

    #[test]
    fn parses_overrides_for_known_providers() {
        let profile = parse(
            r#"{"providers": {"nvidia": {
                "apiKey": "NIM_TOKEN",
                "baseUrl": "https://nim.internal/v1",
                "api": "openai-responses"
            }}}"#,
        )
        .expect("valid profile")
        .expect("profile present");

        assert_eq!(
            profile.get("nvidia"),
            Some(&ProviderOverride {
                api_key: Some("NIM_TOKEN".into()),
                base_url: Some("https://nim.internal/v1".into()),
                api: Some(Api::OpenAIResponses),
            })
        );
    }

    #[test]
    fn empty_block_still_names_the_provider() {
        let profile = parse(r#"{"providers": {"nvidia": {}}}"#)
            .expect("valid profile")
            .expect("profile present");
        assert_eq!(profile.get("nvidia"), Some(&ProviderOverride::default()));
    }

    #[test]
    fn null_fields_are_unset() {
        let profile = parse(r#"{"providers": {"nvidia": {"baseUrl": null}}}"#)
            .expect("valid profile")
            .expect("profile present");
        assert_eq!(profile.get("nvidia").and_then(|o| o.base_url.clone()), None);
    }

    #[test]
    fn unknown_providers_are_dropped_even_when_malformed() {
        let profile = parse(r#"{"providers": {"acme": 42, "other": {"apiKey": 1}}}"#)
            .expect("unknown providers never error")
            .expect("profile present");
        assert!(profile.is_empty());
    }

    #[test]
    fn unusable_documents_mean_no_profile() {
        assert_eq!(parse("not json").expect("no error"), None);
        assert_eq!(parse(r#"{"providers": []}"#).expect("no error"), None);
        assert_eq!(parse(r#"["nvidia"]"#).expect("no error"), None);
        assert_eq!(parse("{}").expect("no error"), Some(Profile::new()));
    }

    #[test]
    fn wrong_field_type_names_provider_and_field() {
        let err = parse(r#"{"providers": {"nvidia": {"baseUrl": 8080}}}"#)
            .expect_err("number base url");
        assert!(err.to_string().contains("expected a string, found a number"));
        assert_eq!(
            invalid_field(err),
            ("nvidia".to_string(), "baseUrl".to_string())
        );
    }

    #[test]
    fn empty_string_field_is_rejected() {
        let err = parse(r#"{"providers": {"moonshot": {"apiKey": ""}}}"#)
            .expect_err("empty api key");
        assert_eq!(
            invalid_field(err),
            ("moonshot".to_string(), "apiKey".to_string())
        );
    }

    #[test]
    fn unknown_api_identifier_is_rejected() {
        let err = parse(r#"{"providers": {"nvidia": {"api": "grpc"}}}"#)
            .expect_err("unknown api");
        assert_eq!(
            invalid_field(err),
            ("nvidia".to_string(), "api".to_string())
        );
    }

    #[test]
    fn non_object_block_is_rejected() {
        let err = parse(r#"{"providers": {"nvidia": "NVIDIA_API_KEY"}}"#)
            .expect_err("string block");
        assert_eq!(
            invalid_field(err),
            ("nvidia".to_string(), "providers.nvidia".to_string())
        );
    }

    #[tokio::test]
    async fn load_without_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let profile = Profile::load(dir.path(), &Catalog::builtin())
            .await
            .expect("missing file is not an error");
        assert_eq!(profile, None);
    }

    #[tokio::test]
    async fn load_reads_profile_from_agent_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            profile_path(dir.path()),
            r#"{"providers": {"xiaomi": {"api": "openai-completions"}}}"#,
        )
        .expect("write profile");

        let profile = Profile::load(dir.path(), &Catalog::builtin())
            .await
            .expect("valid profile")
            .expect("profile present");
        assert_eq!(
            profile.get("xiaomi").and_then(|o| o.api),
            Some(Api::OpenAICompletions)
        );
    }

    #[tokio::test]
    async fn load_treats_unreadable_profile_as_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory in place of the file makes the read fail with a non-NotFound error.
        std::fs::create_dir(profile_path(dir.path())).expect("create dir");

        let profile = Profile::load(dir.path(), &Catalog::builtin())
            .await
            .expect("read failure is not an error");
        assert_eq!(profile, None);
    }
}
