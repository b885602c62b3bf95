use crate::config::ModelProvider;
use crate::config::Config;
use crate::error::Error;
use crate::llm::openai::ChatCompletions;
use crate::request::Client;
use crate::tools::{ToolChoice, ToolSpec};
use super::{ChatTurn, UsageStats};

/// One remote model invocation over the full conversation thread.
/// The client keeps no state between calls: the thread passed in
/// is the entire model context every time.
pub trait Completion {

    /// Send the thread and the tool declarations to the model.
    /// Returns exactly one assistant turn plus usage stats for the call.
    fn complete(&self, thread: &[ChatTurn], tools: &[ToolSpec], tool_choice: ToolChoice) -> Result<Reply, Error>;
}

/// Result of a single completion call.
pub struct Reply {
    /// Assistant turn returned by the model.
    pub turn: ChatTurn,
    /// Token usage for the call.
    pub usage: UsageStats,
}

/// Create Completion instance.
pub fn get_completion(config: Config, client: Box<dyn Client>) -> Result<Box<dyn Completion>, Error> {
    Ok(match config.provider {
        // OpenRouter speaks the same chat-completions wire format.
        ModelProvider::OpenAI | ModelProvider::OpenRouter => Box::new(ChatCompletions::new(config, client)),
    })
}
