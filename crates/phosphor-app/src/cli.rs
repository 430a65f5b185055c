use std::path::PathBuf;

use clap::Parser;

/// phosphor: a retro CRT terminal.
#[derive(Parser, Debug)]
#[command(name = "phosphor", version, about)]
pub struct Args {
    /// Startup config document.
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// File read by the import key (F3).
    #[arg(long, default_value = phosphor_config::EXPORT_FILE_NAME)]
    pub import: PathBuf,

    /// Directory holding the logo images.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Directory of extra font files.
    #[arg(long)]
    pub fonts: Option<PathBuf>,

    /// Command endpoint override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Restart in place when the post-boot countdown ends instead of
    /// opening the access URL.
    #[arg(long)]
    pub dev: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["phosphor"]);
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert_eq!(args.import, PathBuf::from("terminal-config.json"));
        assert!(!args.dev);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.width, 1280.0);
        assert_eq!(args.height, 800.0);
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "phosphor",
            "--dev",
            "--endpoint",
            "http://localhost:3000/api",
            "--assets",
            "assets",
            "--width",
            "375",
        ]);
        assert!(args.dev);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:3000/api"));
        assert_eq!(args.assets, Some(PathBuf::from("assets")));
        assert_eq!(args.width, 375.0);
    }
}
