use chatlabs_lib::Config as ModelParams;
use chatlabs_lib::ModelProvider;

use crate::{error::AppError, options::Options, util::{api_url_for_provider, default_model_for_provider}};

const DEFAULT_DELAY_MS: u64 = 400;
const DEFAULT_BANNER_WIDTH: usize = 64;
const DEFAULT_BANNER_FILL: char = '=';

/// Lab the application will run
#[derive(Debug, Clone, Copy)]
pub enum Lab {
    /// Single call, no tools
    ChatBasics,
    /// Render a prompt template, then one call
    PromptTemplate,
    /// Two calls connected by a locally executed tool call
    ToolCalls,
}

impl TryFrom<&str> for Lab {
    type Error = AppError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        match val {
            "chat-basics" => Ok(Lab::ChatBasics),
            "prompt-template" => Ok(Lab::PromptTemplate),
            "tool-calls" => Ok(Lab::ToolCalls),
            _ => Err(AppError::ConfigParseError("unknown lab")),
        }
    }
}

/// Presentation settings.
#[derive(Clone, Debug)]
pub struct Settings {
    /// User messages color.
    pub user_color: (Option<[u8;3]>, Option<[u8;3]>),
    /// Model messages color.
    pub model_color: (Option<[u8;3]>, Option<[u8;3]>),
    /// Tool output color.
    pub tool_color: (Option<[u8;3]>, Option<[u8;3]>),
    /// Pause after each reported line, milliseconds.
    pub delay_ms: u64,
    /// Banner separator width, characters.
    pub banner_width: usize,
    /// Banner separator fill character.
    pub banner_fill: char,
}

/// App config
#[derive(Clone, Debug)]
pub struct Config {
    /// Lab to run
    pub lab: Lab,
    /// Model parameters
    pub model_params: ModelParams,
    /// Settings
    pub settings: Settings,
}

impl TryFrom<Options> for Config {
    type Error = AppError;

    fn try_from(options: Options) -> Result<Self, AppError> {
        let provider: ModelProvider = options.model_provider.as_deref().unwrap_or("openai").try_into()?;
        let model = options.model.unwrap_or_else(|| default_model_for_provider(provider));
        let default_url = api_url_for_provider(provider);

        let model_params = ModelParams {
            provider,
            name: model,
            api_key: options.api_key.unwrap(),
            api_url: options.api_url.unwrap_or(default_url),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            top_p: options.top_p,
        };

        let settings = Settings {
            user_color: options.user_color,
            model_color: options.model_color,
            tool_color: options.tool_color,
            delay_ms: options.delay_ms.map(|v| v as u64).unwrap_or(DEFAULT_DELAY_MS),
            banner_width: options.banner_width.map(|v| v as usize).unwrap_or(DEFAULT_BANNER_WIDTH),
            banner_fill: options.banner_fill.unwrap_or(DEFAULT_BANNER_FILL),
        };

        Ok(Config {
            lab: options.lab.unwrap().as_str().try_into()?,
            model_params,
            settings,
        })
    }
}
