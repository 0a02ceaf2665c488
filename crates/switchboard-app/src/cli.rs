use std::path::PathBuf;

use clap::Parser;

/// Switchboard: several web inboxes in one window.
#[derive(Parser, Debug)]
#[command(name = "switchboard", version, about)]
pub struct Args {
    /// Directory holding state.json and shell.toml.
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Directory icons are served from (overrides shell.toml).
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Log filter directive, e.g. `switchboard=debug`.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let args = Args::try_parse_from(["switchboard"]).unwrap();
        assert!(args.config_dir.is_none());
        assert!(args.assets.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "switchboard",
            "--config-dir",
            "/tmp/sb",
            "--assets",
            "./assets",
            "--log-level",
            "switchboard=debug",
        ])
        .unwrap();
        assert_eq!(args.config_dir, Some(PathBuf::from("/tmp/sb")));
        assert_eq!(args.assets, Some(PathBuf::from("./assets")));
        assert_eq!(args.log_level.as_deref(), Some("switchboard=debug"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["switchboard", "--theme", "dark"]).is_err());
    }
}
