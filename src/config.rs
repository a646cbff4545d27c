//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::highlight::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME, SyntectHighlighter, ThemePair};

/// Command line configuration for quillpost.
#[derive(Debug, Clone, Parser)]
#[command(name = "quillpost", version, about, long_about = None)]
pub struct Config {
    /// Directory containing .mdx and .md posts
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site title
    #[arg(long, default_value = "Blog")]
    pub title: String,

    /// Site author shown in the footer
    #[arg(long)]
    pub author: Option<String>,

    /// Code highlighting theme for dark mode
    #[arg(long, default_value = DEFAULT_DARK_THEME)]
    pub dark_theme: String,

    /// Code highlighting theme for light mode
    #[arg(long, default_value = DEFAULT_LIGHT_THEME)]
    pub light_theme: String,

    /// Script URL of the guestbook comment widget
    #[arg(long)]
    pub guestbook_script: Option<String>,

    /// Open the generated site in a browser
    #[arg(long)]
    pub open: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist or a theme
    /// name is not available to the highlighter.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!("Content directory does not exist: {}", self.content.display());
        }

        let highlighter = SyntectHighlighter::new();
        for theme in [&self.dark_theme, &self.light_theme] {
            if !highlighter.has_theme(theme) {
                bail!(
                    "Unknown theme '{}'; available: {}",
                    theme,
                    highlighter.theme_names().join(", ")
                );
            }
        }

        Ok(())
    }

    /// Dark and light themes requested for code blocks.
    pub fn themes(&self) -> ThemePair {
        ThemePair::new(self.dark_theme.clone(), self.light_theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(content: PathBuf) -> Config {
        Config {
            content,
            output: PathBuf::from("dist"),
            title: "Blog".to_string(),
            author: None,
            dark_theme: DEFAULT_DARK_THEME.to_string(),
            light_theme: DEFAULT_LIGHT_THEME.to_string(),
            guestbook_script: None,
            open: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_parse_defaults() {
        // Arrange & Act
        let config = <Config as Parser>::parse_from(["quillpost"]);

        // Assert
        assert_eq!(config.content, PathBuf::from("content"));
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.dark_theme, DEFAULT_DARK_THEME);
        assert_eq!(config.light_theme, DEFAULT_LIGHT_THEME);
        assert!(!config.open);
        assert_eq!(config.verbose, 0);
    }

    #[test]
    fn test_parse_flags() {
        // Arrange & Act
        let config = <Config as Parser>::parse_from([
            "quillpost",
            "posts",
            "-o",
            "public",
            "--title",
            "My Site",
            "--dark-theme",
            "Solarized (dark)",
            "--guestbook-script",
            "https://widgets.example.com/guestbook.js",
            "-vv",
        ]);

        // Assert
        assert_eq!(config.content, PathBuf::from("posts"));
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.title, "My Site");
        assert_eq!(config.themes().dark, "Solarized (dark)");
        assert_eq!(
            config.guestbook_script.as_deref(),
            Some("https://widgets.example.com/guestbook.js")
        );
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn test_validate_existing_dir() -> anyhow::Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let config = config(dir.path().to_path_buf());

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Existing directory should be valid");
        Ok(())
    }

    #[test]
    fn test_validate_missing_dir() {
        // Arrange
        let config = config(PathBuf::from("/nonexistent/quillpost/content"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_unknown_theme() -> anyhow::Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let mut config = config(dir.path().to_path_buf());
        config.light_theme = "Nope".to_string();

        // Act
        let err = config.validate().expect_err("Unknown theme should fail");

        // Assert
        assert!(err.to_string().contains("Nope"), "{}", err);
        assert!(err.to_string().contains(DEFAULT_LIGHT_THEME), "{}", err);
        Ok(())
    }
}
