//! The lab scripts.

mod chat_basics;
mod prompt_template;
mod tool_calls;

use crate::config::{Config, Lab};
use crate::error::AppError;
use crate::report::Reporter;

/// Run the configured lab.
pub fn run_lab(config: &Config) -> Result<(), AppError> {
    let mut reporter = Reporter::new(&config.settings);

    match config.lab {
        Lab::ChatBasics => chat_basics::run(config, &mut reporter),
        Lab::PromptTemplate => prompt_template::run(config, &mut reporter),
        Lab::ToolCalls => tool_calls::run(config, &mut reporter),
    }
}
