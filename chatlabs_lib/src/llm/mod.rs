//! LLM interface
mod completion;
mod openai;
mod turns;
mod usage;
mod util;

pub use completion::Completion;
pub use completion::Reply;
pub use completion::get_completion;
pub use turns::ChatTurn;
pub use turns::Role;
pub use turns::ToolCallRequest;
pub use turns::validate_thread;
pub use usage::UsageStats;
