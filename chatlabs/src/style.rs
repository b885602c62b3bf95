//! Terminal styles.
use anstyle::Color;
use anstyle::RgbColor;
use anstyle::Style;
use crate::config::Settings;

/// Styles.
pub struct Styles {
    /// Banner separator style.
    pub banner: Style,
    /// Sequence number style.
    pub step: Style,
    /// User role label style.
    pub user_prompt: Style,
    /// User message style.
    pub user_text: Style,
    /// Model role label style.
    pub model_prompt: Style,
    /// Model message style.
    pub model_text: Style,
    /// Tool role label style.
    pub tool_prompt: Style,
    /// Tool output style.
    pub tool_text: Style,
}

impl Styles {

    /// Load styles.
    pub fn new(settings: &Settings) -> Self {
        let mut fg_user_color = Color::Rgb(RgbColor(128, 64, 64));
        let mut fg_model_color = Color::Rgb(RgbColor(64, 128, 64));
        let mut fg_tool_color = Color::Rgb(RgbColor(128, 128, 0));

        let mut bg_user_color = Color::Rgb(RgbColor(128, 0, 0));
        let mut bg_model_color = Color::Rgb(RgbColor(0, 128, 0));
        let mut bg_tool_color = Color::Rgb(RgbColor(64, 64, 0));

        if let (Some([r1,g1,b1]), Some([r2,g2,b2])) = settings.user_color {
            fg_user_color = Color::Rgb(RgbColor(r1,g1,b1));
            bg_user_color = Color::Rgb(RgbColor(r2,g2,b2));
        }
        if let (Some([r1,g1,b1]), Some([r2,g2,b2])) = settings.model_color {
            fg_model_color = Color::Rgb(RgbColor(r1,g1,b1));
            bg_model_color = Color::Rgb(RgbColor(r2,g2,b2));
        }
        if let (Some([r1,g1,b1]), Some([r2,g2,b2])) = settings.tool_color {
            fg_tool_color = Color::Rgb(RgbColor(r1,g1,b1));
            bg_tool_color = Color::Rgb(RgbColor(r2,g2,b2));
        }

        let white = Color::Rgb(RgbColor(255,255,255));

        let banner = Style::new().bold();
        let step = Style::new().dimmed();

        let user_prompt = Style::new().bold().bg_color(Some(bg_user_color)).fg_color(Some(white));
        let user_text = Style::new().fg_color(Some(fg_user_color));

        let model_prompt = Style::new().bold().bg_color(Some(bg_model_color)).fg_color(Some(white));
        let model_text = Style::new().fg_color(Some(fg_model_color));

        let tool_prompt = Style::new().bold().bg_color(Some(bg_tool_color)).fg_color(Some(white));
        let tool_text = Style::new().fg_color(Some(fg_tool_color));

        Self {
            banner,
            step,
            user_prompt,
            user_text,
            model_prompt,
            model_text,
            tool_prompt,
            tool_text,
        }
    }
}
