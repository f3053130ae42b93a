use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphgridError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("document error: {0}")]
    Document(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("buffer.max_glyphs must be > 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: buffer.max_glyphs must be > 0"
        );
    }

    #[test]
    fn glyphgrid_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GlyphgridError = config_err.into();
        assert!(matches!(err, GlyphgridError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn glyphgrid_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GlyphgridError = io_err.into();
        assert!(matches!(err, GlyphgridError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn glyphgrid_error_other_variants() {
        let err = GlyphgridError::Renderer("no adapter".into());
        assert_eq!(err.to_string(), "renderer error: no adapter");

        let err = GlyphgridError::Document("not utf-8".into());
        assert_eq!(err.to_string(), "document error: not utf-8");
    }
}
