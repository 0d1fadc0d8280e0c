use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "zodgen=info";
const VERBOSE_LOG_FILTER: &str = "zodgen=debug";

/// Install the stderr subscriber. `RUST_LOG` wins over both defaults.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}
