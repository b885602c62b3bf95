//! Render a static prompt template, then send the result as a user turn.

use chatlabs_lib::llm::{get_completion, ChatTurn};
use chatlabs_lib::request::get_reqwest_client;
use chatlabs_lib::tools::ToolChoice;

use crate::config::Config;
use crate::error::AppError;
use crate::prompts;
use crate::report::Reporter;

pub fn run(config: &Config, reporter: &mut Reporter) -> Result<(), AppError> {
    reporter.banner("prompt template");

    let values = [
        ("rating", "4"),
        ("dish", "carnitas burrito bowl"),
        ("audience", "first-time visitors"),
    ];

    reporter.step(&format!("template: {}", prompts::REVIEW_TEMPLATE));
    for (key, value) in &values {
        reporter.step(&format!("  {key} = {value}"));
    }

    let rendered = prompts::render(prompts::REVIEW_TEMPLATE, &values);
    reporter.step(&format!("rendered: {rendered}"));

    let thread = vec![
        ChatTurn::system(prompts::LAB_SYSTEM_PROMPT),
        ChatTurn::user(rendered),
    ];

    let client = get_reqwest_client()?;
    let completion = get_completion(config.model_params.clone(), client)?;

    reporter.step(&format!("calling {}", config.model_params.name));

    let reply = completion.complete(&thread, &[], ToolChoice::None)?;

    reporter.turn(&reply.turn);
    reporter.usage(&reply.usage);

    reporter.banner("done");
    Ok(())
}
