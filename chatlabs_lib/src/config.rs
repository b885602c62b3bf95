use crate::error::Error;

/// Model providers.
#[derive(Debug, Clone, Copy)]
pub enum ModelProvider {
    /// Open AI.
    OpenAI,
    /// OpenRouter.
    OpenRouter,
}

impl TryFrom<&str> for ModelProvider {
    type Error = Error;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        match val {
            "openai" => Ok(ModelProvider::OpenAI),
            "openrouter" => Ok(ModelProvider::OpenRouter),
            _ => Err(Error::Error(format!("unknown provider: {val}"))),
        }
    }
}

/// Model parameters.
#[derive(Clone, Debug)]
pub struct Config {
    /// Model provider.
    pub provider: ModelProvider,
    /// Model name.
    pub name: String,
    /// API key.
    pub api_key: String,
    /// Model API URL.
    pub api_url: String,
    /// Maximum number of tokens that will be generated.
    pub max_tokens: Option<i64>,
    /// Level of randomization when choosing tokens.
    pub temperature: Option<f64>,
    /// Only the tokens comprising the top_p probability mass will be considered.
    pub top_p: Option<f64>,
}

impl Config {

    /// Create minimal config using provider, model name, API key, and API URL.
    pub fn new(provider: ModelProvider, name: String, api_key: String, api_url: String) -> Self {
        Config {
            provider,
            name,
            api_key,
            api_url,
            max_tokens: None,
            temperature: None,
            top_p: None,
        }
    }
}
