/// Initialize tracing/logging for applications and tests that embed this library.
///
/// Uses `try_init` so tests and libraries can call this multiple times without
/// panicking.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(parse_level(default_level))
        .with_target(false)
        .try_init();
}

fn parse_level(text: &str) -> tracing::Level {
    match text.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" | "warning" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    }
}
