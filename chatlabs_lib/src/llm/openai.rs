use crate::llm::Completion;
use crate::config::Config;
use crate::error::Error;
use crate::tools::{ToolChoice, ToolSpec};
use crate::val_as_str;
use serde_json::{json, Value};
use crate::request::Client;
use super::{ChatTurn, Reply, ToolCallRequest, UsageStats};
use super::turns::validate_thread;
use super::util;

pub struct ChatCompletions {
    config: Config,
    client: Box<dyn Client>,
}

impl ChatCompletions {
    pub(super) fn new(config: Config, client: Box<dyn Client>) -> Self {
        ChatCompletions {
            config,
            client,
        }
    }

    fn prep_payload(&self, thread: &[ChatTurn], tools: &[ToolSpec], tool_choice: ToolChoice) -> Value {

        let mut payload = json!({
            "model": self.config.name
        });

        let mut messages = Vec::with_capacity(thread.len());
        for turn in thread {
            messages.push(turn_to_value(turn));
        }
        payload["messages"] = Value::Array(messages);

        util::set_i64_param(&mut payload, "max_completion_tokens", &self.config.max_tokens);
        util::set_f64_param(&mut payload, "temperature", &self.config.temperature);
        util::set_f64_param(&mut payload, "top_p", &self.config.top_p);

        self.prep_tool_use(&mut payload, tools, tool_choice);

        payload
    }

    fn prep_tool_use(&self, payload: &mut Value, tools: &[ToolSpec], tool_choice: ToolChoice) {
        match tool_choice {
            ToolChoice::None => {},
            ToolChoice::Auto => {
                payload["tool_choice"] = Value::String("auto".to_owned());
                self.add_tools(payload, tools);
            },
            ToolChoice::Required => {
                payload["tool_choice"] = Value::String("required".to_owned());
                self.add_tools(payload, tools);
            },
            ToolChoice::Force(tool) => {
                payload["tool_choice"] = json!({
                    "type": "function",
                    "function": {
                        "name": tool
                    }
                });
                self.add_tools(payload, tools);
            },
        };
    }

    fn add_tools(&self, payload: &mut Value, tools: &[ToolSpec]) {
        let mut arr = Vec::with_capacity(tools.len());
        for spec in tools.iter() {
            arr.push(json!({
                "type": "function",
                "function": {
                    "description": spec.description,
                    "name": spec.name,
                    "parameters": spec.params_schema(),
                    "strict": true
                }
            }));
        }
        payload["tools"] = Value::Array(arr);
    }

    fn check_for_error(&self, response: &Value) -> Result<(), Error> {
        if let Some(error) = response.get("error") {
            let errmes = val_as_str!(error["message"], "error message").to_owned();
            return Err(Error::LLMErrorMessage(errmes));
        }
        Ok(())
    }

    fn process_response(&self, response: Value) -> Result<Reply, Error> {

        self.check_for_error(&response)?;

        let choice = response["choices"].as_array()
            .and_then(|choices| choices.first())
            .ok_or(Error::LLMResponseError("unexpected answer format, response contains no choices."))?;

        let msg = &choice["message"];

        let role = val_as_str!(msg["role"], "message role");
        if role != "assistant" {
            return Err(Error::LLMResponseError("LLM returned message with an unexpected role."));
        }

        let content = if msg["content"].is_null() {
            None
        } else {
            Some(val_as_str!(msg["content"], "message content").to_owned())
        };

        let mut tool_calls = Vec::new();

        if !msg["tool_calls"].is_null() {
            for call in msg["tool_calls"].as_array()
                .ok_or(Error::LLMResponseError("unexpected answer format, can't enumerate tool call requests."))?
            {
                // Only "function" entries belong to this contract, other kinds are dropped.
                if call["type"].as_str() != Some("function") {
                    continue;
                }

                let id = val_as_str!(call["id"], "tool call id").to_owned();
                let name = val_as_str!(call["function"]["name"], "tool name").to_owned();

                // Argument text stays raw, parsing it is the executor's job.
                let arguments = val_as_str!(call["function"]["arguments"], "tool arguments").to_owned();

                tool_calls.push(ToolCallRequest { id, name, arguments });
            }
        }

        let usage = parse_usage(&response);

        Ok(Reply {
            turn: ChatTurn::Assistant { content, tool_calls },
            usage,
        })
    }
}

fn turn_to_value(turn: &ChatTurn) -> Value {
    match turn {
        ChatTurn::System { content } => json!({
            "role": "system",
            "content": content
        }),
        ChatTurn::User { content } => json!({
            "role": "user",
            "content": content
        }),
        ChatTurn::Assistant { content, tool_calls } => {
            let mut msg = json!({
                "role": "assistant",
                "content": match content {
                    Some(text) => Value::String(text.clone()),
                    None => Value::Null,
                }
            });

            if !tool_calls.is_empty() {
                msg["tool_calls"] = Value::Array(tool_calls.iter().map(|call| json!({
                    "id": call.id,
                    "type": "function",
                    "function": {
                        "name": call.name,
                        "arguments": call.arguments
                    }
                })).collect());
            }

            msg
        },
        ChatTurn::Tool { call_id, content, .. } => json!({
            "role": "tool",
            "content": content,
            "tool_call_id": call_id
        }),
    }
}

fn parse_usage(response: &Value) -> UsageStats {
    let usage = &response["usage"];

    UsageStats {
        prompt_tokens: usage["prompt_tokens"].as_u64(),
        completion_tokens: usage["completion_tokens"].as_u64(),
        total_tokens: usage["total_tokens"].as_u64(),
    }
}

impl Completion for ChatCompletions {

    fn complete(&self, thread: &[ChatTurn], tools: &[ToolSpec], tool_choice: ToolChoice) -> Result<Reply, Error> {
        validate_thread(thread)?;

        let payload = self.prep_payload(thread, tools, tool_choice);

        let token = format!("Bearer {}", self.config.api_key);
        let headers = &[("Authorization", token.as_ref())];

        let response = self.client.make_json_request(&self.config.api_url, payload, headers)?;

        self.process_response(response)
    }
}
