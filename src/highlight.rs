//! Dual theme syntax highlighting with syntect.

use std::fmt::Write;
use syntect::easy::ScopeRangeIterator;
use syntect::highlighting::{Color, Highlighter, Theme, ThemeSet};
use syntect::parsing::{ParseState, ScopeStack, SyntaxSet};
use syntect::util::LinesWithEndings;
use thiserror::Error;

/// Default theme applied when the page is in dark mode.
pub const DEFAULT_DARK_THEME: &str = "base16-ocean.dark";

/// Default theme applied when the page is in light mode.
pub const DEFAULT_LIGHT_THEME: &str = "InspiredGitHub";

/// Errors raised by a highlighting service.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// No grammar matches the language tag.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Theme name is not loaded.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Grammar failed on the input.
    #[error("failed to highlight {language} code: {message}")]
    Parse { language: String, message: String },
}

/// Named theme set requested for every highlight call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub dark: String,
    pub light: String,
}

impl ThemePair {
    pub fn new(dark: impl Into<String>, light: impl Into<String>) -> Self {
        Self {
            dark: dark.into(),
            light: light.into(),
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self::new(DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME)
    }
}

/// Syntax highlighting service used by code block rendering.
///
/// Implementations must return well-formed markup: the fragment is inserted
/// into the page without further escaping.
pub trait CodeHighlighter: Send + Sync {
    /// Highlights `code` written in `language` for both themes.
    ///
    /// # Errors
    ///
    /// Returns error if the language or a theme is not recognized.
    fn highlight(
        &self,
        code: &str,
        language: &str,
        themes: &ThemePair,
    ) -> Result<String, HighlightError>;
}

/// Highlighter backed by syntect's bundled grammars and themes.
///
/// Each token carries its light theme colour as `color` and its dark theme
/// colour as the `--hl-dark` custom property, so a stylesheet can switch
/// themes without re-rendering.
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl SyntectHighlighter {
    /// Loads default grammars and themes.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Returns true if the named theme is available.
    pub fn has_theme(&self, name: &str) -> bool {
        self.theme_set.themes.contains_key(name)
    }

    /// Names of all loaded themes, sorted.
    pub fn theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.theme_set.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn theme(&self, name: &str) -> Result<&Theme, HighlightError> {
        self.theme_set
            .themes
            .get(name)
            .ok_or_else(|| HighlightError::UnknownTheme(name.to_string()))
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter for SyntectHighlighter {
    fn highlight(
        &self,
        code: &str,
        language: &str,
        themes: &ThemePair,
    ) -> Result<String, HighlightError> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
            .ok_or_else(|| HighlightError::UnsupportedLanguage(language.to_string()))?;

        let dark_theme = self.theme(&themes.dark)?;
        let light_theme = self.theme(&themes.light)?;
        let dark = Highlighter::new(dark_theme);
        let light = Highlighter::new(light_theme);

        let parse_error = |message: String| HighlightError::Parse {
            language: language.to_string(),
            message,
        };

        let mut html = String::with_capacity(code.len() * 4);
        let _ = write!(
            html,
            "<pre class=\"highlight highlight-themes {} {}\" style=\"{}\" tabindex=\"0\"><code>",
            escape_html(&themes.dark),
            escape_html(&themes.light),
            pre_style(light_theme, dark_theme),
        );

        let mut parse_state = ParseState::new(syntax);
        let mut stack = ScopeStack::new();
        let code = code.strip_suffix('\n').unwrap_or(code);

        for (index, line) in LinesWithEndings::from(code).enumerate() {
            if index > 0 {
                html.push('\n');
            }
            html.push_str("<span class=\"line\">");

            let ops = parse_state
                .parse_line(line, &self.syntax_set)
                .map_err(|e| parse_error(e.to_string()))?;

            for (range, op) in ScopeRangeIterator::new(&ops, line) {
                stack.apply(op).map_err(|e| parse_error(format!("{:?}", e)))?;

                let text = line[range].trim_end_matches(['\n', '\r']);
                if text.is_empty() {
                    continue;
                }

                let light_style = light.style_for_stack(stack.as_slice());
                let dark_style = dark.style_for_stack(stack.as_slice());
                let _ = write!(
                    html,
                    "<span style=\"color:{};--hl-dark:{}\">{}</span>",
                    hex_color(light_style.foreground),
                    hex_color(dark_style.foreground),
                    escape_html(text)
                );
            }

            html.push_str("</span>");
        }

        html.push_str("</code></pre>");
        Ok(html)
    }
}

/// Inline style for the wrapping `pre`: light colours plus dark overrides.
fn pre_style(light: &Theme, dark: &Theme) -> String {
    let mut style = String::new();
    if let Some(bg) = light.settings.background {
        let _ = write!(style, "background-color:{};", hex_color(bg));
    }
    if let Some(bg) = dark.settings.background {
        let _ = write!(style, "--hl-dark-bg:{};", hex_color(bg));
    }
    if let Some(fg) = light.settings.foreground {
        let _ = write!(style, "color:{};", hex_color(fg));
    }
    if let Some(fg) = dark.settings.foreground {
        let _ = write!(style, "--hl-dark:{};", hex_color(fg));
    }
    style
}

fn hex_color(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Escapes HTML special characters.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_python() {
        // Arrange
        let highlighter = SyntectHighlighter::new();

        // Act
        let html = highlighter
            .highlight("print(1)", "python", &ThemePair::default())
            .expect("Python should highlight");

        // Assert
        assert!(html.starts_with("<pre class=\"highlight highlight-themes"));
        assert!(html.contains("--hl-dark:"), "Should carry dark colours");
        assert!(html.contains("print"), "Should keep code text");
        assert!(html.ends_with("</code></pre>"));
    }

    #[test]
    fn test_highlight_one_line_span_per_line() {
        // Arrange
        let highlighter = SyntectHighlighter::new();
        let code = "fn main() {\n    let x = 1;\n}\n";

        // Act
        let html = highlighter
            .highlight(code, "rust", &ThemePair::default())
            .expect("Rust should highlight");

        // Assert
        assert_eq!(html.matches("<span class=\"line\">").count(), 3);
    }

    #[test]
    fn test_highlight_by_extension() {
        // Arrange
        let highlighter = SyntectHighlighter::new();

        // Act
        let result = highlighter.highlight("fn main() {}", "rs", &ThemePair::default());

        // Assert
        assert!(result.is_ok(), "Extension should resolve grammar");
    }

    #[test]
    fn test_highlight_unsupported_language() {
        // Arrange
        let highlighter = SyntectHighlighter::new();

        // Act
        let result = highlighter.highlight("x", "no-such-language", &ThemePair::default());

        // Assert
        assert!(matches!(
            result,
            Err(HighlightError::UnsupportedLanguage(lang)) if lang == "no-such-language"
        ));
    }

    #[test]
    fn test_highlight_unknown_theme() {
        // Arrange
        let highlighter = SyntectHighlighter::new();
        let themes = ThemePair::new("missing-dark", DEFAULT_LIGHT_THEME);

        // Act
        let result = highlighter.highlight("x = 1", "python", &themes);

        // Assert
        assert!(matches!(result, Err(HighlightError::UnknownTheme(name)) if name == "missing-dark"));
    }

    #[test]
    fn test_highlight_escapes_tokens() {
        // Arrange
        let highlighter = SyntectHighlighter::new();
        let code = r#"const x = "<script>alert('xss')</script>";"#;

        // Act
        let html = highlighter
            .highlight(code, "js", &ThemePair::default())
            .expect("JavaScript should highlight");

        // Assert
        assert!(!html.contains("<script>"), "Tokens must be escaped: {}", html);
        assert!(html.contains("&lt;script&gt;") || html.contains("&lt;"));
    }

    #[test]
    fn test_default_themes_are_loaded() {
        // Arrange
        let highlighter = SyntectHighlighter::new();

        // Act & Assert
        assert!(highlighter.has_theme(DEFAULT_DARK_THEME));
        assert!(highlighter.has_theme(DEFAULT_LIGHT_THEME));
        assert!(highlighter.theme_names().contains(&DEFAULT_DARK_THEME));
    }

    #[test]
    fn test_escape_html_all_characters() {
        assert_eq!(escape_html(r#"<>&"'"#), "&lt;&gt;&amp;&quot;&#39;");
    }
}
