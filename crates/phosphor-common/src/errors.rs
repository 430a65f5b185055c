use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PhosphorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("remote error: {0}")]
    Remote(String),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/config.json"));
        assert_eq!(err.to_string(), "config file not found: /tmp/config.json");

        let err = ConfigError::ParseError("expected value at line 1 column 1".into());
        assert_eq!(
            err.to_string(),
            "config parse error: expected value at line 1 column 1"
        );

        let err = ConfigError::ValidationError("crt.curvature: invalid type".into());
        assert_eq!(
            err.to_string(),
            "config validation error: crt.curvature: invalid type"
        );

        let err = ConfigError::WriteError("read-only file system".into());
        assert_eq!(err.to_string(), "config write error: read-only file system");
    }

    #[test]
    fn phosphor_error_from_config() {
        let config_err = ConfigError::ParseError("trailing comma".into());
        let err: PhosphorError = config_err.into();
        assert!(matches!(err, PhosphorError::Config(_)));
        assert!(err.to_string().contains("trailing comma"));
    }

    #[test]
    fn phosphor_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "frame_00.png");
        let err: PhosphorError = io_err.into();
        assert!(matches!(err, PhosphorError::Io(_)));
        assert!(err.to_string().contains("frame_00.png"));
    }

    #[test]
    fn phosphor_error_other_variants() {
        let err = PhosphorError::Remote("connection refused".into());
        assert_eq!(err.to_string(), "remote error: connection refused");

        let err = PhosphorError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = PhosphorError::Platform("no url opener".into());
        assert_eq!(err.to_string(), "platform error: no url opener");

        let err = PhosphorError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
