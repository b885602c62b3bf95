use std::time::Duration;

use chatlabs_lib::llm::{ChatTurn, Role, UsageStats};
use crate::config::Settings;
use crate::style::Styles;

/// Paced, sequence-numbered console output.
/// Cosmetic only: sequence numbers and delays are never part of the lab logic.
pub struct Reporter {
    seq: u32,
    delay: Duration,
    width: usize,
    fill: char,
    styles: Styles,
    dumb: bool,
}

impl Reporter {

    /// New instance.
    pub fn new(settings: &Settings) -> Self {
        let dumb = Ok("dumb") == std::env::var("TERM").as_deref();

        Reporter {
            seq: 0,
            delay: Duration::from_millis(settings.delay_ms),
            width: settings.banner_width,
            fill: settings.banner_fill,
            styles: Styles::new(settings),
            dumb,
        }
    }

    /// Print a section separator filled to the configured width.
    pub fn banner(&mut self, title: &str) {
        let line = if title.is_empty() {
            self.fill.to_string().repeat(self.width)
        } else {
            let title = format!(" {} ", title);
            if title.chars().count() >= self.width {
                title
            } else {
                let pad = self.width - title.chars().count();
                let left = pad / 2;
                let right = pad - left;
                format!("{}{}{}",
                    self.fill.to_string().repeat(left),
                    title,
                    self.fill.to_string().repeat(right))
            }
        };

        if self.dumb {
            println!("{line}");
        } else {
            println!("{}{}{:#}", self.styles.banner, line, self.styles.banner);
        }

        self.pause(self.delay);
    }

    /// Print the next sequence-numbered line.
    pub fn step(&mut self, text: &str) {
        self.step_paced(text, None);
    }

    /// Print the next sequence-numbered line with a per-call delay override.
    pub fn step_paced(&mut self, text: &str, delay: Option<Duration>) {
        let n = self.next();

        if self.dumb {
            println!("[{n}] {text}");
        } else {
            println!("{}[{n}]{:#} {text}", self.styles.step, self.styles.step);
        }

        self.pause(delay.unwrap_or(self.delay));
    }

    /// Print a chat turn as a sequence-numbered, role-labeled line.
    pub fn turn(&mut self, turn: &ChatTurn) {
        let n = self.next();
        let label = turn.role().to_string().to_uppercase();
        let text = describe(turn);

        if self.dumb {
            println!("[{n}] {label}> {text}");
            self.pause(self.delay);
            return;
        }

        let (prompt_style, text_style) = match turn.role() {
            Role::System => (&self.styles.step, &self.styles.step),
            Role::User => (&self.styles.user_prompt, &self.styles.user_text),
            Role::Assistant => (&self.styles.model_prompt, &self.styles.model_text),
            Role::Tool => (&self.styles.tool_prompt, &self.styles.tool_text),
        };

        println!("{}[{n}]{:#} {} {} {:#} {}{}{:#}",
            self.styles.step,
            self.styles.step,
            prompt_style,
            label,
            prompt_style,
            text_style,
            text,
            text_style
        );

        self.pause(self.delay);
    }

    /// Print usage stats for one completion call, "n/a" when absent.
    pub fn usage(&mut self, usage: &UsageStats) {
        let text = format!("usage - {}", usage);
        self.step(&text);
    }

    fn next(&mut self) -> u32 {
        self.seq += 1;
        self.seq
    }

    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

// One line per turn; a tool-call-only assistant turn lists its requests.
fn describe(turn: &ChatTurn) -> String {
    let calls = turn.tool_calls();

    if calls.is_empty() {
        return turn.text().to_owned();
    }

    let mut parts = Vec::with_capacity(calls.len());
    for call in calls {
        parts.push(format!("{}({}) [{}]", call.name, call.arguments, call.id));
    }

    let mut out = turn.text().to_owned();
    if !out.is_empty() {
        out.push(' ');
    }
    out + "requests: " + &parts.join(", ")
}


#[cfg(test)]
mod tests {
    use super::*;
    use chatlabs_lib::llm::ToolCallRequest;

    #[test]
    fn test_describe_plain_turn() {
        let turn = ChatTurn::user("hello");
        assert_eq!(describe(&turn), "hello");
    }

    #[test]
    fn test_describe_tool_call_turn() {
        let turn = ChatTurn::assistant_with_tool_calls(None, vec![ToolCallRequest {
            id: "call_1".to_owned(),
            name: "get_restaurant_stats".to_owned(),
            arguments: "{\"chain\":\"Chipotle\"}".to_owned(),
        }]);

        assert_eq!(describe(&turn), "requests: get_restaurant_stats({\"chain\":\"Chipotle\"}) [call_1]");
    }
}
