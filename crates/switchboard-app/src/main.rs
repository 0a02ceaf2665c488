mod app_state;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use switchboard_config::shell::{load_or_create, SHELL_FILE};
use switchboard_config::{paths, ShellSettings, StateStore};

const DEFAULT_LOG_DIRECTIVE: &str = "switchboard=info";

fn init_logging(directive: Option<&str>) {
    let mut filter = EnvFilter::from_default_env();
    match directive.unwrap_or(DEFAULT_LOG_DIRECTIVE).parse() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => {
            eprintln!("Ignoring invalid --log-level: {e}");
            if let Ok(d) = DEFAULT_LOG_DIRECTIVE.parse() {
                filter = filter.add_directive(d);
            }
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Where state.json, shell.toml and the partitions live.
fn resolve_dirs(args: &cli::Args) -> Option<(PathBuf, PathBuf)> {
    if let Some(ref dir) = args.config_dir {
        return Some((dir.clone(), dir.join("partitions")));
    }
    let config_dir = match paths::config_dir() {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Cannot locate config directory: {e}");
            return None;
        }
    };
    let partitions = paths::partitions_dir().unwrap_or_else(|e| {
        tracing::warn!("Cannot locate data directory, keeping partitions with config: {e}");
        config_dir.join("partitions")
    });
    Some((config_dir, partitions))
}

fn main() {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::info!("Switchboard v{} starting...", env!("CARGO_PKG_VERSION"));

    let Some((config_dir, partitions_root)) = resolve_dirs(&args) else {
        std::process::exit(1);
    };
    tracing::info!(
        config_dir = %config_dir.display(),
        partitions = %partitions_root.display(),
        "Directories resolved"
    );

    let mut shell = load_or_create(&config_dir.join(SHELL_FILE)).unwrap_or_else(|e| {
        tracing::warn!("Shell settings load failed, using defaults: {e}");
        ShellSettings::default()
    });
    if let Some(assets) = args.assets {
        shell.assets.dir = assets;
    }

    let store = StateStore::new(&config_dir);

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::SwitchboardApp::new(shell, store, partitions_root);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
