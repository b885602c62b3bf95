use std::fmt::Display;
use crate::error::Error;


/// Chat roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// System.
    System,
    /// User.
    User,
    /// Assistant.
    Assistant,
    /// Tool.
    Tool,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        };
        f.write_str(role)
    }
}

/// Tool call request emitted by the model inside an assistant turn.
#[derive(Debug, Clone)]
pub struct ToolCallRequest {
    /// Call id assigned by the model.
    pub id: String,
    /// Function name.
    pub name: String,
    /// JSON-encoded argument text, exactly as returned by the model.
    pub arguments: String,
}

/// One turn of the conversation thread.
#[derive(Debug, Clone)]
pub enum ChatTurn {
    /// System instruction.
    System {
        /// Instruction text.
        content: String,
    },
    /// User message.
    User {
        /// Message text.
        content: String,
    },
    /// Assistant reply, with zero or more tool call requests.
    Assistant {
        /// Reply text, absent when the model only requests tool calls.
        content: Option<String>,
        /// Tool call requests, in the order the model returned them.
        tool_calls: Vec<ToolCallRequest>,
    },
    /// Result of a locally executed tool call.
    Tool {
        /// Id of the tool call request this turn answers.
        call_id: String,
        /// Function name.
        name: String,
        /// Serialized call result.
        content: String,
    },
}

impl ChatTurn {

    /// Create system turn.
    pub fn system(content: impl Into<String>) -> Self {
        ChatTurn::System { content: content.into() }
    }

    /// Create user turn.
    pub fn user(content: impl Into<String>) -> Self {
        ChatTurn::User { content: content.into() }
    }

    /// Create assistant turn without tool calls.
    pub fn assistant(content: impl Into<String>) -> Self {
        ChatTurn::Assistant { content: Some(content.into()), tool_calls: vec![] }
    }

    /// Create assistant turn carrying tool call requests.
    pub fn assistant_with_tool_calls(content: Option<String>, tool_calls: Vec<ToolCallRequest>) -> Self {
        ChatTurn::Assistant { content, tool_calls }
    }

    /// Create tool result turn.
    pub fn tool_result(call_id: String, name: String, content: String) -> Self {
        ChatTurn::Tool { call_id, name, content }
    }

    /// Role of the turn.
    pub fn role(&self) -> Role {
        match self {
            ChatTurn::System { .. } => Role::System,
            ChatTurn::User { .. } => Role::User,
            ChatTurn::Assistant { .. } => Role::Assistant,
            ChatTurn::Tool { .. } => Role::Tool,
        }
    }

    /// Text content of the turn, empty string when absent.
    pub fn text(&self) -> &str {
        match self {
            ChatTurn::System { content } => content,
            ChatTurn::User { content } => content,
            ChatTurn::Assistant { content, .. } => content.as_deref().unwrap_or(""),
            ChatTurn::Tool { content, .. } => content,
        }
    }

    /// Tool call requests carried by the turn.
    pub fn tool_calls(&self) -> &[ToolCallRequest] {
        match self {
            ChatTurn::Assistant { tool_calls, .. } => tool_calls,
            _ => &[],
        }
    }
}

/// Check that the thread is non-empty and every tool turn answers
/// a tool call requested by an earlier assistant turn.
pub fn validate_thread(thread: &[ChatTurn]) -> Result<(), Error> {
    if thread.is_empty() {
        return Err(Error::ThreadError("thread must contain at least one turn."));
    }

    let mut known_ids: Vec<&str> = Vec::new();

    for turn in thread {
        match turn {
            ChatTurn::Assistant { tool_calls, .. } => {
                known_ids.extend(tool_calls.iter().map(|call| call.id.as_str()));
            },
            ChatTurn::Tool { call_id, .. } => {
                if !known_ids.contains(&call_id.as_str()) {
                    return Err(Error::ThreadError("tool turn does not answer any tool call from a previous assistant turn."));
                }
            },
            _ => {}
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn call(id: &str) -> ToolCallRequest {
        ToolCallRequest {
            id: id.to_owned(),
            name: "tool".to_owned(),
            arguments: "{}".to_owned(),
        }
    }

    #[test]
    fn test_validate_thread_ok() {
        let thread = vec![
            ChatTurn::system("sys"),
            ChatTurn::user("usr"),
            ChatTurn::assistant_with_tool_calls(None, vec![call("id1"), call("id2")]),
            ChatTurn::tool_result("id1".into(), "tool".into(), "{}".into()),
            ChatTurn::tool_result("id2".into(), "tool".into(), "null".into()),
            ChatTurn::assistant("done"),
        ];

        assert!(validate_thread(&thread).is_ok());
    }

    #[test]
    fn test_validate_thread_empty() {
        assert!(matches!(validate_thread(&[]), Err(Error::ThreadError(_))));
    }

    #[test]
    fn test_validate_thread_orphan_tool_turn() {
        let thread = vec![
            ChatTurn::system("sys"),
            ChatTurn::tool_result("id1".into(), "tool".into(), "{}".into()),
        ];

        assert!(matches!(validate_thread(&thread), Err(Error::ThreadError(_))));
    }

    #[test]
    fn test_validate_thread_tool_before_assistant() {
        let thread = vec![
            ChatTurn::system("sys"),
            ChatTurn::tool_result("id1".into(), "tool".into(), "{}".into()),
            ChatTurn::assistant_with_tool_calls(None, vec![call("id1")]),
        ];

        assert!(matches!(validate_thread(&thread), Err(Error::ThreadError(_))));
    }

    #[test]
    fn test_turn_text_sentinel() {
        let turn = ChatTurn::assistant_with_tool_calls(None, vec![call("id1")]);
        assert_eq!(turn.text(), "");
        assert_eq!(turn.tool_calls().len(), 1);
        assert_eq!(turn.role(), Role::Assistant);
    }
}
