//! Prompts and templates used by the labs.

/// System prompt shared by the plain chat labs.
pub const LAB_SYSTEM_PROMPT: &str = "You are a concise assistant used in a classroom demonstration of a chat completion API. Keep every answer short.";

/// System prompt for the tool calling lab.
pub const TOOL_LAB_SYSTEM_PROMPT: &str = "You are a restaurant industry analyst. \
Ground every claim about a chain in the numbers returned by the get_restaurant_stats tool. \
If the tool returns null for a chain, say that no data is available for it.";

/// Template for the prompt rendering lab.
pub const REVIEW_TEMPLATE: &str = "Write a {rating}-star review of the {dish} aimed at {audience}. Two sentences at most.";

/// Substitute {key} placeholders with values. Unknown placeholders are left as is.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut result = template.to_owned();

    for (key, value) in values {
        result = result.replace(&format!("{{{key}}}"), value);
    }

    result
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let rendered = render(REVIEW_TEMPLATE, &[
            ("rating", "4"),
            ("dish", "carnitas bowl"),
            ("audience", "first-time visitors"),
        ]);

        assert_eq!(rendered, "Write a 4-star review of the carnitas bowl aimed at first-time visitors. Two sentences at most.");
    }

    #[test]
    fn test_render_missing_placeholder_left_as_is() {
        let rendered = render("{greeting}, {name}!", &[("name", "class")]);
        assert_eq!(rendered, "{greeting}, class!");
    }
}
