//! Built-in provider catalog.
//!
//! Adding a provider means adding a [`ProviderRegistryEntry`] to
//! [`BUILTIN_PROVIDERS`]; the resolver has no per-provider logic.

use crate::model::{Api, InputModality, ModelCost, ModelDescriptor};

const TEXT: &[InputModality] = &[InputModality::Text];
const TEXT_IMAGE: &[InputModality] = &[InputModality::Text, InputModality::Image];

/// Static registration for a provider that can be enabled implicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderRegistryEntry {
    /// Provider identifier, e.g. `"nvidia"`.
    pub id: &'static str,
    /// Environment variable whose presence enables the provider.
    pub env_var: &'static str,
    /// Default base API URL.
    pub base_url: &'static str,
    pub api: Api,
    /// Models offered by this provider, in display order.
    pub models: &'static [ModelDescriptor],
}

impl ProviderRegistryEntry {
    pub fn find_model(&self, model_id: &str) -> Option<&'static ModelDescriptor> {
        self.models.iter().find(|model| model.id == model_id)
    }
}

/// Environment variable name conventionally used for a provider's API key
/// (`"cloudflare-ai"` becomes `"CLOUDFLARE_AI_API_KEY"`).
pub fn env_var_name(provider_id: &str) -> String {
    let mut name: String = provider_id
        .chars()
        .map(|c| match c {
            '-' | '.' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect();
    name.push_str("_API_KEY");
    name
}

/// An immutable table of known providers.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [ProviderRegistryEntry],
}

impl Catalog {
    /// Wrap an arbitrary static provider table.
    pub const fn new(entries: &'static [ProviderRegistryEntry]) -> Self {
        Self { entries }
    }

    /// The catalog of providers this crate ships with.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_PROVIDERS)
    }

    pub fn get(&self, provider_id: &str) -> Option<&'static ProviderRegistryEntry> {
        self.entries.iter().find(|entry| entry.id == provider_id)
    }

    pub fn contains(&self, provider_id: &str) -> bool {
        self.get(provider_id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, ProviderRegistryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub const BUILTIN_PROVIDERS: &[ProviderRegistryEntry] = &[
    ProviderRegistryEntry {
        id: "minimax",
        env_var: "MINIMAX_API_KEY",
        base_url: "https://api.minimax.io/anthropic",
        api: Api::AnthropicMessages,
        models: MINIMAX_MODELS,
    },
    ProviderRegistryEntry {
        id: "moonshot",
        env_var: "MOONSHOT_API_KEY",
        base_url: "https://api.moonshot.ai/v1",
        api: Api::OpenAICompletions,
        models: MOONSHOT_MODELS,
    },
    ProviderRegistryEntry {
        id: "nvidia",
        env_var: "NVIDIA_API_KEY",
        base_url: "https://integrate.api.nvidia.com/v1",
        api: Api::OpenAICompletions,
        models: NVIDIA_MODELS,
    },
    ProviderRegistryEntry {
        id: "synthetic",
        env_var: "SYNTHETIC_API_KEY",
        base_url: "https://api.synthetic.new/anthropic",
        api: Api::AnthropicMessages,
        models: SYNTHETIC_MODELS,
    },
    ProviderRegistryEntry {
        id: "together",
        env_var: "TOGETHER_API_KEY",
        base_url: "https://api.together.xyz/v1",
        api: Api::OpenAICompletions,
        models: TOGETHER_MODELS,
    },
    ProviderRegistryEntry {
        id: "venice",
        env_var: "VENICE_API_KEY",
        base_url: "https://api.venice.ai/api/v1",
        api: Api::OpenAICompletions,
        models: VENICE_MODELS,
    },
    ProviderRegistryEntry {
        id: "xiaomi",
        env_var: "XIAOMI_API_KEY",
        base_url: "https://api.xiaomimimo.com/anthropic",
        api: Api::AnthropicMessages,
        models: XIAOMI_MODELS,
    },
];

const MINIMAX_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "MiniMax-M2.1",
        name: "MiniMax M2.1",
        reasoning: false,
        input: TEXT,
        cost: ModelCost {
            input: 15.0,
            output: 60.0,
            cache_read: 2.0,
            cache_write: 10.0,
        },
        context_window: 200_000,
        max_tokens: 8192,
    },
    ModelDescriptor {
        id: "MiniMax-VL-01",
        name: "MiniMax VL 01",
        reasoning: false,
        input: TEXT_IMAGE,
        cost: ModelCost {
            input: 15.0,
            output: 60.0,
            cache_read: 2.0,
            cache_write: 10.0,
        },
        context_window: 200_000,
        max_tokens: 8192,
    },
];

const MOONSHOT_MODELS: &[ModelDescriptor] = &[ModelDescriptor {
    id: "kimi-k2.5",
    name: "Kimi K2.5",
    reasoning: false,
    input: TEXT,
    cost: ModelCost::FREE,
    context_window: 256_000,
    max_tokens: 8192,
}];

const NVIDIA_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "moonshot/kimi-2-5",
        name: "Kimi 2.5 (NVIDIA)",
        reasoning: false,
        input: TEXT,
        cost: ModelCost::FREE,
        context_window: 256_000,
        max_tokens: 8192,
    },
    ModelDescriptor {
        id: "nvidia/llama-3.1-nemotron-70b-instruct",
        name: "Llama 3.1 Nemotron 70B Instruct (NVIDIA)",
        reasoning: false,
        input: TEXT,
        cost: ModelCost::FREE,
        context_window: 131_072,
        max_tokens: 4096,
    },
    ModelDescriptor {
        id: "meta/llama-3.3-70b-instruct",
        name: "Llama 3.3 70B Instruct (NVIDIA)",
        reasoning: false,
        input: TEXT,
        cost: ModelCost::FREE,
        context_window: 131_072,
        max_tokens: 4096,
    },
    ModelDescriptor {
        id: "deepseek-ai/deepseek-r1",
        name: "DeepSeek R1 (NVIDIA)",
        reasoning: true,
        input: TEXT,
        cost: ModelCost::FREE,
        context_window: 128_000,
        max_tokens: 8192,
    },
];

const SYNTHETIC_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "hf:MiniMaxAI/MiniMax-M2.1",
        name: "MiniMax M2.1",
        reasoning: false,
        input: TEXT,
        cost: ModelCost::FREE,
        context_window: 192_000,
        max_tokens: 65_536,
    },
    ModelDescriptor {
        id: "hf:moonshotai/Kimi-K2-Thinking",
        name: "Kimi K2 Thinking",
        reasoning: true,
        input: TEXT,
        cost: ModelCost::FREE,
        context_window: 256_000,
        max_tokens: 8192,
    },
];

const TOGETHER_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "meta-llama/Llama-3.3-70B-Instruct-Turbo",
        name: "Llama 3.3 70B Instruct Turbo",
        reasoning: false,
        input: TEXT,
        cost: ModelCost {
            input: 0.88,
            output: 0.88,
            cache_read: 0.0,
            cache_write: 0.0,
        },
        context_window: 131_072,
        max_tokens: 8192,
    },
    ModelDescriptor {
        id: "deepseek-ai/DeepSeek-R1",
        name: "DeepSeek R1",
        reasoning: true,
        input: TEXT,
        cost: ModelCost {
            input: 3.0,
            output: 7.0,
            cache_read: 0.0,
            cache_write: 0.0,
        },
        context_window: 163_840,
        max_tokens: 8192,
    },
];

const VENICE_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "llama-3.3-70b",
        name: "Llama 3.3 70B",
        reasoning: false,
        input: TEXT,
        cost: ModelCost::FREE,
        context_window: 65_536,
        max_tokens: 8192,
    },
    ModelDescriptor {
        id: "qwen3-235b",
        name: "Qwen3 235B",
        reasoning: true,
        input: TEXT,
        cost: ModelCost::FREE,
        context_window: 131_072,
        max_tokens: 8192,
    },
];

const XIAOMI_MODELS: &[ModelDescriptor] = &[ModelDescriptor {
    id: "mimo-v2-flash",
    name: "Xiaomi MiMo V2 Flash",
    reasoning: false,
    input: TEXT,
    cost: ModelCost::FREE,
    context_window: 262_144,
    max_tokens: 8192,
}];
