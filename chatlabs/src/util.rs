use chatlabs_lib::ModelProvider;
use crate::AppError;

/// API URL by provider.
pub fn api_url_for_provider(provider: ModelProvider) -> String {
    match provider {
        ModelProvider::OpenAI => "https://api.openai.com/v1/chat/completions".into(),
        ModelProvider::OpenRouter => "https://openrouter.ai/api/v1/chat/completions".into(),
    }
}

/// Default model by provider, used when no override is given.
pub fn default_model_for_provider(provider: ModelProvider) -> String {
    match provider {
        ModelProvider::OpenAI => "gpt-4o-mini".into(),
        ModelProvider::OpenRouter => "openai/gpt-4o-mini".into(),
    }
}

/// Parse foreground and background colors from string.
pub fn parse_colors(s: &str) -> Result<(Option<[u8;3]>, Option<[u8;3]>), AppError> {
    let mut fg = None;
    let mut bg = None;
    let s = s.trim();
    let s = s.trim_matches(['\'', '"']);

    for part in s.split(";") {
        let part = part.trim();

        if let Some(rgb) = part.strip_prefix("bg") {
            bg.replace(parse_color(rgb.trim())?);
        } else if let Some(rgb) = part.strip_prefix("fg") {
            fg.replace(parse_color(rgb.trim())?);
        } else {
            return Err(AppError::ColorParseError);
        };
    }

    Ok((fg, bg))
}

fn parse_color(s: &str) -> Result<[u8;3], AppError> {
    let mut color = [0u8;3];
    if !(s.starts_with('(') && s.ends_with(')')) {
        return Err(AppError::ColorParseError)
    }

    let mut i = 0;
    let s = &s[1..s.len()-1];
    for s in s.split(',') {
        if i > 2 {
            return Err(AppError::ColorParseError);
        }
        color[i] = s.trim().parse::<u8>().map_err(|_| AppError::ColorParseError)?;
        i+=1;
    }
    if i < 3 {
        return Err(AppError::ColorParseError);
    }

    Ok(color)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("( 0, 123, 255 )").unwrap(), [0,123,255]);
        assert_eq!(parse_color("(0,123,255)").unwrap(), [0,123,255]);
        assert!(matches!(parse_color("( 256, 123, 123 )").unwrap_err(), AppError::ColorParseError));
        assert!(matches!(parse_color("( 256, 123, -1 )").unwrap_err(), AppError::ColorParseError));
        assert!(matches!(parse_color("( 123, 123, 123, 123 )").unwrap_err(), AppError::ColorParseError));
        assert!(matches!(parse_color("(123, 123)").unwrap_err(), AppError::ColorParseError));
        assert!(matches!(parse_color("asdfg").unwrap_err(), AppError::ColorParseError));
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(parse_colors(" bg ( 0, 123, 255 ) ").unwrap(), (None, Some([0,123,255])));
        assert_eq!(parse_colors("fg(0,123,255)").unwrap(), (Some([0,123,255]), None));
        assert_eq!(parse_colors(" bg ( 255, 0, 123 ) ; fg ( 0, 123, 255 ) ").unwrap(), (Some([0,123,255]), Some([255,0,123])));
        assert_eq!(parse_colors("fg(255,0,123);bg(0,123,255)").unwrap(), (Some([255,0,123]), Some([0,123,255])));
        assert!(matches!(parse_colors("fg(255,0,123);gg(0,123,255)").unwrap_err(), AppError::ColorParseError));
        assert!(matches!(parse_colors("fg(255,0,123)bg(0,123,255)").unwrap_err(), AppError::ColorParseError));
    }

    #[test]
    fn test_api_url_for_provider() {
        assert_eq!(api_url_for_provider(ModelProvider::OpenAI), "https://api.openai.com/v1/chat/completions");
        assert_eq!(api_url_for_provider(ModelProvider::OpenRouter), "https://openrouter.ai/api/v1/chat/completions");
    }
}
