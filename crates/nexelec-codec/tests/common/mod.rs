use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber; `RUST_LOG` selects the level.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .with_target(false)
            .without_time()
            .try_init();
    });
}
