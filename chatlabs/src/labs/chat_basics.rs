//! One request, one response: the minimal chat completion call.

use chatlabs_lib::llm::{get_completion, ChatTurn};
use chatlabs_lib::request::get_reqwest_client;
use chatlabs_lib::tools::ToolChoice;

use crate::config::Config;
use crate::error::AppError;
use crate::prompts;
use crate::report::Reporter;

pub fn run(config: &Config, reporter: &mut Reporter) -> Result<(), AppError> {
    reporter.banner("chat basics");

    let thread = vec![
        ChatTurn::system(prompts::LAB_SYSTEM_PROMPT),
        ChatTurn::user("In two sentences, what does a chat completion endpoint do?"),
    ];

    reporter.step("the request thread, every call sends the whole thread");
    for turn in &thread {
        reporter.turn(turn);
    }

    let client = get_reqwest_client()?;
    let completion = get_completion(config.model_params.clone(), client)?;

    reporter.step(&format!("calling {} at {}", config.model_params.name, config.model_params.api_url));

    let reply = completion.complete(&thread, &[], ToolChoice::None)?;

    reporter.turn(&reply.turn);
    reporter.usage(&reply.usage);

    reporter.banner("done");
    Ok(())
}
