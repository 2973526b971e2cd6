//! Static model metadata types.
//!
//! These serialize with camelCase keys (`contextWindow`, `cacheRead`, ...),
//! which is the shape downstream dispatch code consumes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Wire protocol spoken by a provider endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Api {
    #[serde(rename = "openai-completions")]
    OpenAICompletions,
    #[serde(rename = "openai-responses")]
    OpenAIResponses,
    #[serde(rename = "anthropic-messages")]
    AnthropicMessages,
    #[serde(rename = "google-generative-ai")]
    GoogleGenerativeAI,
}

impl Api {
    /// Stable protocol identifier (e.g. `"openai-completions"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Api::OpenAICompletions => "openai-completions",
            Api::OpenAIResponses => "openai-responses",
            Api::AnthropicMessages => "anthropic-messages",
            Api::GoogleGenerativeAI => "google-generative-ai",
        }
    }
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Api {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai-completions" => Ok(Api::OpenAICompletions),
            "openai-responses" => Ok(Api::OpenAIResponses),
            "anthropic-messages" => Ok(Api::AnthropicMessages),
            "google-generative-ai" => Ok(Api::GoogleGenerativeAI),
            other => Err(format!("unknown api protocol '{other}'")),
        }
    }
}

/// Input modality accepted by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputModality {
    Text,
    Image,
}

/// Cost per million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCost {
    pub input: f64,
    pub output: f64,
    pub cache_read: f64,
    pub cache_write: f64,
}

impl ModelCost {
    /// No charge for any token class.
    pub const FREE: ModelCost = ModelCost {
        input: 0.0,
        output: 0.0,
        cache_read: 0.0,
        cache_write: 0.0,
    };
}

/// A model offered by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model identifier sent on the wire, e.g. `"moonshot/kimi-2-5"`.
    pub id: &'static str,
    /// Human-friendly display name.
    pub name: &'static str,
    /// Whether the model supports reasoning / chain-of-thought.
    pub reasoning: bool,
    /// Accepted input modalities, in declaration order.
    pub input: &'static [InputModality],
    pub cost: ModelCost,
    /// Maximum context window size in tokens.
    pub context_window: u32,
    /// Maximum output tokens.
    pub max_tokens: u32,
}

impl ModelDescriptor {
    pub fn accepts(&self, modality: InputModality) -> bool {
        self.input.contains(&modality)
    }
}
