use api_rest::{AppState, page::load_index_page, router};
use namaste_core::{Chatbot, CoreConfig, DiseaseCatalogue};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str =
    "namaste_run=debug,namaste_core=debug,api_rest=debug,tower_http=debug";

/// `RUST_LOG` wins outright when set; otherwise fall back to [`DEFAULT_LOG_FILTER`].
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}

/// Main entry point for the NAMASTE lookup service
///
/// Resolves configuration, prepares the runtime directories, loads the disease catalogue once,
/// then serves the REST API until the process is stopped.
///
/// # Environment Variables
/// - `NAMASTE_REST_ADDR`: server address (default: "0.0.0.0:5000")
/// - `NAMASTE_DATA_FILE`: prepared CSV loaded at startup (default: "data/to_show.csv")
/// - `NAMASTE_TEMPLATE_DIR`: directory holding `index.html` (default: "templates")
/// - `NAMASTE_STATIC_DIR`: directory served under `/static` (default: "static")
/// - `RUST_LOG`: log filter (default: [`DEFAULT_LOG_FILTER`])
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a runtime directory cannot be created,
/// - the data file is missing or malformed, or
/// - the server address cannot be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env()?;
    cfg.ensure_runtime_dirs()?;

    let catalogue = DiseaseCatalogue::load(cfg.data_file())?;
    let index_page = load_index_page(&cfg.index_page_path())?;
    let state = AppState::new(catalogue, Chatbot::default(), index_page);

    let app = router(state, cfg.static_dir());

    tracing::info!("++ Starting NAMASTE lookup on {}", cfg.rest_addr());
    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_debug() {
        let filter = log_filter(None).to_string();
        assert!(filter.contains("api_rest=debug"));
        assert!(filter.contains("tower_http=debug"));
        assert_eq!(log_filter(Some("  ")).to_string(), filter);
    }

    #[test]
    fn test_log_filter_rust_log_overrides_defaults() {
        let filter = log_filter(Some("api_rest=warn")).to_string();
        assert_eq!(filter, "api_rest=warn");
    }
}
