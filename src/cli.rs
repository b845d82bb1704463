//! Command-line interface.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use tracing::{debug, info};

use crate::config::{self, OutputFormat, Settings};
use crate::error::{AppError, Result};
use crate::markup;
use crate::render::{AnsiRenderer, HtmlRenderer, HyperlinkStyle, PlainRenderer, Render};

/// Render JIRA wiki markup for the terminal.
#[derive(Debug, Parser)]
#[command(name = "jiramark", version, about)]
pub struct Cli {
    /// Markup file to render. Reads stdin when absent or `-`.
    pub file: Option<PathBuf>,

    /// Output format [default: from config, else ansi]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to emit terminal escape sequences.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// How hyperlinks are written in ANSI output [default: from config, else legacy]
    #[arg(long, value_enum)]
    pub hyperlinks: Option<HyperlinkStyle>,

    /// Configuration file.
    #[arg(short, long, env = "JIRAMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// When ANSI output is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always, even when output is piped.
    Always,
    /// Never; write plain text.
    Never,
}

impl ColorMode {
    /// Decide whether escape sequences should be written.
    pub fn enabled(self, stdout_is_tty: bool, no_color: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_tty && !no_color,
        }
    }
}

/// Fully resolved rendering options.
#[derive(Debug, Clone)]
pub struct Options {
    pub format: OutputFormat,
    pub hyperlinks: HyperlinkStyle,
    pub color: bool,
}

impl Options {
    /// Combine command-line flags with settings; flags win.
    pub fn resolve(cli: &Cli, settings: &Settings, stdout_is_tty: bool, no_color: bool) -> Self {
        Self {
            format: cli.format.unwrap_or(settings.format),
            hyperlinks: cli.hyperlinks.unwrap_or(settings.hyperlinks),
            color: cli.color.enabled(stdout_is_tty, no_color),
        }
    }
}

/// Run the command.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = config::load(cli.config.as_deref())?;
    let input = read_input(cli.file.as_deref())?;

    let mut stdout = io::stdout();
    let options = Options::resolve(cli, &settings, stdout.is_tty(), no_color_requested());
    debug!(?options, "Resolved options");

    let output = render_output(&input, &options, &settings)?;

    stdout.write_all(output.as_bytes())?;
    if !output.is_empty() && !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(())
}

/// Parse `input` and render it according to `options`.
pub fn render_output(input: &str, options: &Options, settings: &Settings) -> Result<String> {
    let nodes = markup::parse(input);
    info!(nodes = nodes.len(), format = ?options.format, "Rendering markup");

    let output = match options.format {
        OutputFormat::Ansi if options.color => {
            AnsiRenderer::new(settings.palette(), options.hyperlinks).render(&nodes)
        }
        OutputFormat::Ansi | OutputFormat::Plain => PlainRenderer.render(&nodes),
        OutputFormat::Html => HtmlRenderer.render(&nodes),
        OutputFormat::Json => serde_json::to_string_pretty(&nodes)?,
    };

    Ok(output)
}

/// Whether the `NO_COLOR` convention asks for uncolored output.
fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading markup file");
            std::fs::read_to_string(path).map_err(|e| AppError::input(path, e))
        }
        _ => {
            let mut stdin = io::stdin();
            if stdin.is_tty() {
                return Err(AppError::other(
                    "No input: pass a markup file or pipe text on stdin.",
                ));
            }
            let mut input = String::new();
            stdin.read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    fn options(format: OutputFormat, color: bool) -> Options {
        Options {
            format,
            hyperlinks: HyperlinkStyle::Legacy,
            color,
        }
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "jiramark",
            "--format",
            "html",
            "--color",
            "always",
            "--hyperlinks",
            "terminated",
            "notes.txt",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Html));
        assert_eq!(cli.color, ColorMode::Always);
        assert_eq!(cli.hyperlinks, Some(HyperlinkStyle::Terminated));
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["jiramark", "--format", "pdf"]).is_err());
    }

    #[test]
    fn test_color_mode() {
        assert!(ColorMode::Always.enabled(false, true));
        assert!(!ColorMode::Never.enabled(true, false));
        assert!(ColorMode::Auto.enabled(true, false));
        assert!(!ColorMode::Auto.enabled(false, false));
        assert!(!ColorMode::Auto.enabled(true, true));
    }

    #[test]
    fn test_color_mode_values_have_help() {
        for mode in ColorMode::value_variants() {
            let value = mode.to_possible_value().unwrap();
            assert!(value.get_help().is_some(), "{} has no help", value.get_name());
        }
    }

    #[test]
    fn test_options_flags_override_settings() {
        let cli = Cli::try_parse_from(["jiramark", "--hyperlinks", "off"]).unwrap();
        let settings = Settings {
            format: OutputFormat::Html,
            hyperlinks: HyperlinkStyle::Terminated,
            ..Settings::default()
        };

        let options = Options::resolve(&cli, &settings, true, false);
        assert_eq!(options.format, OutputFormat::Html);
        assert_eq!(options.hyperlinks, HyperlinkStyle::Off);
        assert!(options.color);
    }

    #[test]
    fn test_render_ansi() {
        let output = render_output(
            "*bold*",
            &options(OutputFormat::Ansi, true),
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(output, "\x1b[1mbold\x1b[0m");
    }

    #[test]
    fn test_render_ansi_without_color_is_plain() {
        let output = render_output(
            "*bold* [Example|https://example.com]",
            &options(OutputFormat::Ansi, false),
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(output, "bold Example");
    }

    #[test]
    fn test_render_uses_configured_colors() {
        let mut settings = Settings::default();
        settings.colors.insert("blue".to_string(), 34);

        let output = render_output(
            "{color:blue}x{color}",
            &options(OutputFormat::Ansi, true),
            &settings,
        )
        .unwrap();
        assert_eq!(output, "\x1b[34mx\x1b[0m");
    }

    #[test]
    fn test_render_json() {
        let output = render_output(
            "*a* b",
            &options(OutputFormat::Json, false),
            &Settings::default(),
        )
        .unwrap();

        let nodes: Vec<markup::Node> = serde_json::from_str(&output).unwrap();
        assert_eq!(nodes, vec![markup::Node::bold("a"), markup::Node::text(" b")]);
    }

    #[test]
    fn test_render_html() {
        let output = render_output(
            "_a_",
            &options(OutputFormat::Html, true),
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(output, "<em>a</em>");
    }

    #[test]
    fn test_read_input_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "*from file*").unwrap();

        let input = read_input(Some(file.path())).unwrap();
        assert_eq!(input, "*from file*");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_input(Some(&dir.path().join("missing.txt")));
        assert!(matches!(result, Err(AppError::Input { .. })));
    }

    #[test]
    #[serial]
    fn test_no_color_env() {
        let original = std::env::var_os("NO_COLOR");

        std::env::set_var("NO_COLOR", "1");
        assert!(no_color_requested());

        std::env::set_var("NO_COLOR", "");
        assert!(!no_color_requested());

        std::env::remove_var("NO_COLOR");
        assert!(!no_color_requested());

        if let Some(value) = original {
            std::env::set_var("NO_COLOR", value);
        }
    }

    #[test]
    #[serial]
    fn test_config_env_var() {
        let original = std::env::var_os("JIRAMARK_CONFIG");

        std::env::set_var("JIRAMARK_CONFIG", "/tmp/jiramark-test.toml");
        let cli = Cli::try_parse_from(["jiramark"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/jiramark-test.toml")));

        match original {
            Some(value) => std::env::set_var("JIRAMARK_CONFIG", value),
            None => std::env::remove_var("JIRAMARK_CONFIG"),
        }
    }
}
