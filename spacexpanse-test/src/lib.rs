//! Miscellaneous test code for SpaceXpanse.

use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize globals for tests such as the tracing subscriber and panic / error
/// reporting hooks.
///
/// Returns a span guard, so logs from the calling test are grouped together.
/// Callers should keep it alive for the duration of the test:
/// `let _init_guard = spacexpanse_test::init();`
pub fn init() -> tracing::span::EnteredSpan {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer().with_target(false).with_test_writer();
        // Use the RUST_LOG env var, or by default:
        //  - warn for most crates, and
        //  - info for the spacexpanse crates.
        let filter_layer = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("warn,spacexpanse_chain=info,spacexpanse_utils=info"))
            .expect("hard-coded filter directives are valid");

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .with(ErrorLayer::default())
            .init();

        color_eyre::config::HookBuilder::default()
            .display_env_section(false)
            .install()
            .expect("color_eyre hooks are only installed once per process");
    });

    tracing::info_span!("test").entered()
}
