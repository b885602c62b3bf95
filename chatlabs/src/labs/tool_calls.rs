//! Two model calls connected by a locally executed function call.
//!
//! The first call carries the tool declarations. When the model answers with
//! tool call requests, each one is executed locally and appended to the
//! thread as a tool turn, after which a second call produces the grounded
//! answer. When the model answers directly, there is no second call.

use std::time::Duration;

use chatlabs_lib::llm::{get_completion, ChatTurn, Completion};
use chatlabs_lib::request::get_reqwest_client;
use chatlabs_lib::tools::ToolChoice;
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;
use crate::prompts;
use crate::report::Reporter;
use crate::tools::RestaurantStats;

const USER_QUESTION: &str = "Compare Chipotle and Chick-fil-A on size and price.";

pub fn run(config: &Config, reporter: &mut Reporter) -> Result<(), AppError> {
    let client = get_reqwest_client()?;
    let completion = get_completion(config.model_params.clone(), client)?;

    run_round_trip(completion.as_ref(), reporter)?;
    Ok(())
}

/// Drive the round trip and return the final thread.
pub(crate) fn run_round_trip(completion: &dyn Completion, reporter: &mut Reporter) -> Result<Vec<ChatTurn>, AppError> {
    let stats = RestaurantStats::new();
    let tools = vec![stats.get_tool_spec()];

    reporter.banner("tool calling");

    let mut thread = vec![
        ChatTurn::system(prompts::TOOL_LAB_SYSTEM_PROMPT),
        ChatTurn::user(USER_QUESTION),
    ];

    reporter.step("the request thread");
    for turn in &thread {
        reporter.turn(turn);
    }

    reporter.step_paced(
        &format!("first model call, declaring the {} tool", tools[0].name),
        Some(Duration::from_millis(900)),
    );

    let first = completion.complete(&thread, &tools, ToolChoice::Auto)?;
    reporter.usage(&first.usage);

    let calls = first.turn.tool_calls().to_vec();

    // The assistant turn carrying the tool-call list enters the thread before
    // any tool results, the model correlates call ids against it on the next
    // call. This ordering is required by the remote API.
    thread.push(first.turn);

    if calls.is_empty() {
        reporter.step("no tool calls requested, the model answered directly");
        if let Some(turn) = thread.last() {
            reporter.turn(turn);
        }
        reporter.banner("done");
        return Ok(thread);
    }

    for call in &calls {
        reporter.step(&format!("executing {} with arguments {}", call.name, call.arguments));

        let result = if call.name == "get_restaurant_stats" {
            stats.call_tool(&call.arguments)
        } else {
            // Unknown tool names resolve to an absent result, not an error.
            Value::Null.to_string()
        };

        let turn = ChatTurn::tool_result(call.id.clone(), call.name.clone(), result);
        reporter.turn(&turn);
        thread.push(turn);
    }

    reporter.step("second model call, thread now carries the tool results");

    let last = completion.complete(&thread, &tools, ToolChoice::Auto)?;
    reporter.usage(&last.usage);
    reporter.turn(&last.turn);
    thread.push(last.turn);

    reporter.banner("done");
    Ok(thread)
}
