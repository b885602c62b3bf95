use thiserror::Error;

/// App errors
#[derive(Error, Debug)]
pub enum AppError {

    /// Toml parsing error
    #[error("Failed to parse config file: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Config parsing error
    #[error("Failed to parse config file: {0}")]
    ConfigParseError(&'static str),

    /// Missing arguments
    #[error("Missing mandatory arguments: {0}\nTry `chatlabs --help` for more information.")]
    MissingArgError(&'static str),

    /// Missing arguments
    #[error("Incorrect argument value: {0}")]
    InvalidArgError(&'static str),

    /// Library error
    #[error("{0}")]
    LibError(#[from] chatlabs_lib::Error),

    /// Unknown/unexpected error
    #[error("Unknown error")]
    Unknown,

    /// Config parsing error
    #[error("The format of the color value is incorrect")]
    ColorParseError,

    /// General error.
    #[error("{0}")]
    Error(String),
}
