use std::fmt::Display;

/// Token usage reported by the provider per call.
/// Observational only, absent fields render as "n/a".
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageStats {
    /// Tokens consumed by the request.
    pub prompt_tokens: Option<u64>,
    /// Tokens generated by the model.
    pub completion_tokens: Option<u64>,
    /// Total tokens for the call.
    pub total_tokens: Option<u64>,
}

fn field(f: &mut std::fmt::Formatter<'_>, name: &str, val: Option<u64>) -> std::fmt::Result {
    match val {
        Some(v) => write!(f, "{name}: {v}"),
        None => write!(f, "{name}: n/a"),
    }
}

impl Display for UsageStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        field(f, "prompt", self.prompt_tokens)?;
        f.write_str(", ")?;
        field(f, "completion", self.completion_tokens)?;
        f.write_str(", ")?;
        field(f, "total", self.total_tokens)
    }
}
