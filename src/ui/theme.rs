use ratatui::style::Color;

/// Midnight theme colors, with one accent per token segment
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub dimmed: Color,
    pub header: Color,
    pub payload: Color,
    pub signature: Color,
    pub valid: Color,
    pub invalid: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
            header: Color::Rgb(247, 118, 142),  // #F7768E Coral Red
            payload: Color::Rgb(187, 154, 247), // #BB9AF7 Violet
            signature: Color::Rgb(125, 207, 255), // #7DCFFF Cyan
            valid: Color::Rgb(158, 206, 106),   // #9ECE6A Green
            invalid: Color::Rgb(255, 158, 100), // #FF9E64 Orange
        }
    }

    /// Default theme is midnight
    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn header() -> Color {
        Theme::current().header
    }
    pub fn payload() -> Color {
        Theme::current().payload
    }
    pub fn signature() -> Color {
        Theme::current().signature
    }
    pub fn valid() -> Color {
        Theme::current().valid
    }
    pub fn invalid() -> Color {
        Theme::current().invalid
    }
}
