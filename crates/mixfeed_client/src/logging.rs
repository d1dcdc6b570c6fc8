use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Install the default fmt subscriber. Skipped when the host application has
/// already set a dispatcher of its own; safe to call from every entry point.
pub fn init_logging() {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(Level::INFO)
                .init();
        });
    }
}
