use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global JSON subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. Returns `false` without
/// touching the existing subscriber when one is already installed.
pub fn init_tracing(service_name: &str, log_level: &str) -> bool {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init();

    match installed {
        Ok(()) => {
            tracing::info!(service = service_name, "Tracing initialized");
            true
        }
        Err(e) => {
            eprintln!(
                "Tracing for '{}' was not installed, a subscriber already exists: {}",
                service_name, e
            );
            false
        }
    }
}
