use filemenu_integrations::ids::ENV_LOG;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Stderr logging; stdout is reserved for the rendered menu.
pub fn init() {
    let filter = std::env::var(ENV_LOG)
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
