use std::path::PathBuf;

use clap::Parser;

use glyphgrid_common::ConfigError;
use glyphgrid_config::schema::LogLevel;
use glyphgrid_config::{validation, GlyphgridConfig};

/// Filter directive used when nothing else is configured.
pub const DEFAULT_LOG_DIRECTIVE: &str = "glyphgrid=info";

/// glyphgrid — a GPU text-grid viewer with pan and zoom.
#[derive(Parser, Debug)]
#[command(name = "glyphgrid", version, about)]
pub struct Args {
    /// Text file to display. Shows a built-in sample when omitted.
    pub file: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of glyph slots to allocate.
    #[arg(long)]
    pub max_glyphs: Option<u32>,

    /// Initial zoom level, from -10 (closest) to 10 (farthest).
    #[arg(long, allow_hyphen_values = true)]
    pub zoom: Option<f32>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    ///
    /// The result goes through the same validation as the config file. If
    /// it fails, `config` is left untouched and the error is returned.
    pub fn apply_overrides(&self, config: &mut GlyphgridConfig) -> Result<(), ConfigError> {
        let mut candidate = config.clone();
        if let Some(max_glyphs) = self.max_glyphs {
            candidate.buffer.max_glyphs = max_glyphs;
        }
        if let Some(zoom) = self.zoom {
            candidate.viewport.initial_zoom = zoom;
        }

        validation::validate(&candidate)?;
        *config = candidate;
        Ok(())
    }
}

pub fn parse() -> Args {
    Args::parse()
}

/// Pick the tracing filter directive.
///
/// An explicit `--log-level` wins; a bare level is scoped to glyphgrid's
/// own crates, anything else is passed through as a directive.
pub fn log_directive(cli_level: Option<&str>, config_level: Option<LogLevel>) -> String {
    match cli_level {
        Some(level) if is_bare_level(level) => format!("glyphgrid={}", level.to_lowercase()),
        Some(directive) => directive.to_string(),
        None => match config_level {
            Some(level) => format!("glyphgrid={}", level.as_str()),
            None => DEFAULT_LOG_DIRECTIVE.to_string(),
        },
    }
}

/// Directive to switch to once the config file is loaded, or `None` when
/// `--log-level` already decided it.
pub fn configured_log_directive(cli_level: Option<&str>, config_level: LogLevel) -> Option<String> {
    match cli_level {
        Some(_) => None,
        None => Some(log_directive(None, Some(config_level))),
    }
}

fn is_bare_level(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
