//! Logging setup shared by the command-line binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging based on verbosity.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at warn, or info
/// with `verbose`. Output goes to stderr so stdout stays reserved for
/// extraction results.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "pdftext=info"
    } else {
        "pdftext=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
