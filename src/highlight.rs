use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word: cyan when `is_known` accepts it, red otherwise.
    pub fn highlight_command(&self, input: &str, is_known: impl Fn(&str) -> bool) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let Some(start) = input.find(|c: char| !c.is_whitespace()) else {
            return input.to_string();
        };
        let end = input[start..]
            .find(char::is_whitespace)
            .map_or(input.len(), |pos| start + pos);
        let word = &input[start..end];

        let style = if is_known(word) {
            Style::builder().foreground(Color::Cyan).bold().build()
        } else {
            Style::builder().foreground(Color::Red).build()
        };

        format!(
            "{}{}{}",
            &input[..start],
            word.style(style),
            &input[end..]
        )
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.is_enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        error.style(error_style).to_string()
    }

    pub fn highlight_success(&self, message: &str) -> String {
        if !self.is_enabled() {
            return message.to_string();
        }

        let success_style = Style::builder().foreground(Color::Green).build();

        message.style(success_style).to_string()
    }

    pub fn highlight_notice(&self, notice: &str) -> String {
        if !self.is_enabled() {
            return notice.to_string();
        }

        let notice_style = Style::builder().foreground(Color::Yellow).build();

        notice.style(notice_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.is_enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}
