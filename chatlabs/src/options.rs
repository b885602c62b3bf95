//! App initialization functions.

use anstyle::Style;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use std::ffi::OsString;
use std::str::FromStr;
use crate::error::AppError;
use crate::toml_parser::parse_toml_config;
use dirs::home_dir;
use crate::util::parse_colors;

/// App options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Lab to run.
    pub lab: Option<String>,
    /// Model provider.
    pub model_provider: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// API key.
    pub api_key: Option<String>,
    /// Model API URL.
    pub api_url: Option<String>,
    /// Maximum number of tokens that will be generated.
    pub max_tokens: Option<i64>,
    /// Level of randomization when choosing tokens.
    pub temperature: Option<f64>,
    /// Only the tokens comprising the top_p probability mass will be considered.
    pub top_p: Option<f64>,
    /// Pause after each reported line, milliseconds.
    pub delay_ms: Option<i64>,
    /// Banner separator width.
    pub banner_width: Option<i64>,
    /// Banner separator fill character.
    pub banner_fill: Option<char>,
    /// User message color and role label background.
    pub user_color: (Option<[u8;3]>, Option<[u8;3]>),
    /// Model message color and role label background.
    pub model_color: (Option<[u8;3]>, Option<[u8;3]>),
    /// Tool output color and role label background.
    pub tool_color: (Option<[u8;3]>, Option<[u8;3]>),
}


macro_rules! check_and_set_float_arg {
    ($arg:literal, $m:ident, $option:expr) => {
        if let Some(x) = $m.get_one::<String>($arg) {
            if let Ok(val) = f64::from_str(x) {
                $option.replace(val);
            } else {
                return Err(AppError::InvalidArgError(concat!($arg, " must be floating point number")));
            }
        }
    }
}

macro_rules! check_and_set_color_arg {
    ($arg:literal, $m:ident, $option:expr) => {
        if let Some(x) = $m.get_one::<String>($arg) {
            if let Ok(colors) = parse_colors(&x) {
                $option = colors;
            } else {
                return Err(AppError::InvalidArgError(
                    concat!($arg, " must have valid format, e.g. 'fg(255,0,123);bg(0,123,255)'.")
                ));
            }
        }
    }
}

impl Options {

    /// Create new unfilled options.
    pub fn new() -> Self {
        Options {
            lab: None,
            model_provider: None,
            model: None,
            api_key: None,
            api_url: None,
            max_tokens: None,
            temperature: None,
            top_p: None,
            delay_ms: None,
            banner_width: None,
            banner_fill: None,
            user_color: (None, None),
            model_color: (None, None),
            tool_color: (None, None),
        }
    }

    fn argument_parser<T>(args: impl IntoIterator<Item = T>) -> ArgMatches where T: Into<OsString> + Clone {
        let bold_underline = Style::new().underline().bold();
        let bold = Style::new().bold();

        Command::new("Chatlabs")
            .about("Chatlabs is a set of teaching scripts that walk through LLM chat API calls step by step, with numbered, paced console output.")
            .version(env!("CARGO_PKG_VERSION"))
            .arg(
                Arg::new("lab")
                .long("lab")
                .help("One of: chat-basics, prompt-template, tool-calls")
                .short('l')
                .env("CHATLABS_LAB")
                .required(false)
            ).arg(
                Arg::new("model")
                .long("model")
                .help("Inference model name (overrides the provider default)")
                .short('m')
                .env("CHATLABS_MODEL")
                .required(false)
            ).arg(
                Arg::new("model-provider")
                .long("model-provider")
                .help("Model provider, one of: openai, openrouter")
                .short('p')
                .env("CHATLABS_MODEL_PROVIDER")
                .required(false)
            ).arg(
                Arg::new("api-key")
                .long("api-key")
                .help("LLM model API key")
                .short('k')
                .env("CHATLABS_API_KEY")
                .required(false)
            ).arg(
                Arg::new("api-url")
                .long("api-url")
                .help("Model API URL")
                .short('u')
                .env("CHATLABS_API_URL")
                .required(false)
            ).arg(
                Arg::new("config")
                .long("config")
                .help("Config file path")
                .short('c')
                .env("CHATLABS_CONFIG")
                .required(false)
            ).arg(
                Arg::new("max-tokens")
                .long("max-tokens")
                .help("Maximum number of tokens that will be generated")
                .env("CHATLABS_MAX_TOKENS")
                .required(false)
            ).arg(
                Arg::new("temperature")
                .long("temperature")
                .help("Level of randomization when LLM choose tokens")
                .env("CHATLABS_TEMPERATURE")
                .required(false)
            ).arg(
                Arg::new("top-p")
                .long("top-p")
                .help("Only the tokens comprising the top_p probability mass will be considered")
                .env("CHATLABS_TOP_P")
                .required(false)
            ).arg(
                Arg::new("delay-ms")
                .long("delay-ms")
                .help("Pause after each reported line, in milliseconds (0 disables pacing)")
                .env("CHATLABS_DELAY_MS")
                .required(false)
            ).arg(
                Arg::new("banner-width")
                .long("banner-width")
                .help("Width of banner separators, in characters")
                .env("CHATLABS_BANNER_WIDTH")
                .required(false)
            ).arg(
                Arg::new("banner-fill")
                .long("banner-fill")
                .help("Fill character for banner separators")
                .env("CHATLABS_BANNER_FILL")
                .required(false)
            ).arg(
                Arg::new("user-color")
                .long("user-color")
                .help("User messages and role label background colors, rgb (e.g. 'fg(255,0,123);bg(0,123,255)').")
                .env("CHATLABS_USER_COLOR")
                .required(false)
            ).arg(
                Arg::new("model-color")
                .long("model-color")
                .help("Model messages and role label background colors, rgb (e.g. 'fg(255,0,123);bg(0,123,255)').")
                .env("CHATLABS_MODEL_COLOR")
                .required(false)
            ).arg(
                Arg::new("tool-color")
                .long("tool-color")
                .help("Tool output and role label background colors, rgb (e.g. 'fg(255,0,123);bg(0,123,255)').")
                .env("CHATLABS_TOOL_COLOR")
                .required(false)
            )
            .after_help(format!("{bold_underline}Example:{bold_underline:#} {bold}

    chatlabs --lab=tool-calls --model=gpt-4o-mini --model-provider=openai --api-key=<your-key>{bold:#}

To start a lab you need to specify at least the lab name (--lab) and the API key (--api-key, or the CHATLABS_API_KEY environment variable).
Chatlabs uses the configuration file .chatlabs.toml from user's home directory, or the one specified with -c option (see the sample_config.toml for the reference).
If it finds the configuration file it uses configuration options from the file.
The configuration options can be overridden with the command line arguments or environment variables."))
            .get_matches_from(args)
    }

    fn load_config_file(path: Option<&str>) -> Result<Option<String>, std::io::Error> {
        Ok(if let Some(p) = path {
            Some(std::fs::read_to_string(p)?)
        } else if let Some(mut p) = home_dir() {
            p.push(".chatlabs.toml");
            if std::fs::exists(p.as_path())? {
                Some(std::fs::read_to_string(p.as_path())?)
            } else {
                None
            }
        } else {
            None
        })
    }

    fn validate_mandatory_options(options: &Options) -> Result<(), AppError> {
        if options.lab.is_none() {
            return Err(AppError::MissingArgError("lab is not specified."));
        }
        if options.api_key.is_none() {
            return Err(AppError::MissingArgError("API key is not specified."));
        }

        Ok(())
    }

    /// Load and validate options from env, command line arguments, config file.
    pub fn load<T>(args: impl IntoIterator<Item = T>) -> Result<Self, AppError>
        where T: Into<OsString> + Clone
    {
        let m = Self::argument_parser(args);

        let mut options = Options::new();

        let config_path = m.get_one("config").map(|s: &String| s.as_ref());

        if let Some(content) = Self::load_config_file(config_path)
            .map_err(|err| AppError::Error(format!("Error loading config file: {}", err)))?
        {
            parse_toml_config(&content, &mut options)?;
        }

        if let Some(x) = m.get_one::<String>("lab") {
            options.lab.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("model") {
            options.model.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("model-provider") {
            options.model_provider.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("api-key") {
            options.api_key.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("api-url") {
            options.api_url.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("max-tokens") {
            if let Ok(val) = x.parse::<i64>() {
                if val < 0 { return Err(AppError::InvalidArgError("max-tokens must be non-negative")) };
                options.max_tokens.replace(val);
            } else {
                return Err(AppError::InvalidArgError("max-tokens must be integer"));
            }
        }
        if let Some(x) = m.get_one::<String>("delay-ms") {
            if let Ok(val) = x.parse::<i64>() {
                if val < 0 { return Err(AppError::InvalidArgError("delay-ms must be non-negative")) };
                options.delay_ms.replace(val);
            } else {
                return Err(AppError::InvalidArgError("delay-ms must be integer"));
            }
        }
        if let Some(x) = m.get_one::<String>("banner-width") {
            if let Ok(val) = x.parse::<i64>() {
                if val <= 0 { return Err(AppError::InvalidArgError("banner-width must be greater than zero")) };
                options.banner_width.replace(val);
            } else {
                return Err(AppError::InvalidArgError("banner-width must be integer"));
            }
        }
        if let Some(x) = m.get_one::<String>("banner-fill") {
            let mut chars = x.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => { options.banner_fill.replace(c); },
                _ => return Err(AppError::InvalidArgError("banner-fill must be a single character")),
            }
        }

        check_and_set_float_arg!("temperature", m, options.temperature);
        check_and_set_float_arg!("top-p", m, options.top_p);

        check_and_set_color_arg!("user-color", m, options.user_color);
        check_and_set_color_arg!("model-color", m, options.model_color);
        check_and_set_color_arg!("tool-color", m, options.tool_color);

        Self::validate_mandatory_options(&options)?;

        Ok(options)
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_load_options() {

        let mut args = vec![
            OsString::from("/bin/path"),
            OsString::from("--lab=tool-calls"),
            OsString::from("--model=<model>"),
            OsString::from("--model-provider=<model-provider>"),
            OsString::from("--api-key=<api-key>"),
            OsString::from("--api-url=<api-url>"),
            OsString::from("--max-tokens=789"),
            OsString::from("--temperature=0.456"),
            OsString::from("--top-p=0.123"),
            OsString::from("--delay-ms=250"),
            OsString::from("--banner-width=72"),
            OsString::from("--banner-fill=#"),
            OsString::from("--model-color=fg(255,0,124);bg(0,124,255)"),
            OsString::from("--user-color='fg(255,0,125);bg(0,125,255)'"),
            OsString::from("--tool-color=\"fg(255,0,123);bg(0,123,255)\""),
        ];

        let options = Options::load(args.clone()).expect("load options");

        assert_eq!(options.lab, Some("tool-calls".into()));
        assert_eq!(options.model_provider, Some("<model-provider>".into()));
        assert_eq!(options.model, Some("<model>".into()));
        assert_eq!(options.api_key, Some("<api-key>".into()));
        assert_eq!(options.api_url, Some("<api-url>".into()));
        assert_eq!(options.max_tokens, Some(789));
        assert_eq!(options.temperature, Some(0.456));
        assert_eq!(options.top_p, Some(0.123));
        assert_eq!(options.delay_ms, Some(250));
        assert_eq!(options.banner_width, Some(72));
        assert_eq!(options.banner_fill, Some('#'));
        assert_eq!(options.model_color, (Some([255,0,124]), Some([0,124,255])));
        assert_eq!(options.user_color, (Some([255,0,125]), Some([0,125,255])));
        assert_eq!(options.tool_color, (Some([255,0,123]), Some([0,123,255])));

        let mut args2 = args.clone();
        args2.remove(1);
        assert!(matches!(Options::load(args2), Err(AppError::MissingArgError(_))));

        let mut args2 = args.clone();
        args2.remove(4);
        assert!(matches!(Options::load(args2), Err(AppError::MissingArgError(_))));

        args[9] = "--delay-ms=-5".into();
        assert!(matches!(Options::load(args.clone()), Err(AppError::InvalidArgError(_))));

        args[9] = "--delay-ms=250".into();
        args[11] = "--banner-fill=##".into();
        assert!(matches!(Options::load(args), Err(AppError::InvalidArgError(_))));

    }
}
