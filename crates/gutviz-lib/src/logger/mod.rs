use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for CLI use.
///
/// `RUST_LOG` takes precedence when set; otherwise the level is DEBUG when
/// `debug` is true and INFO otherwise.
pub fn init(debug: bool) {
    let fallback = if debug { "gutviz=debug,info" } else { "gutviz=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
