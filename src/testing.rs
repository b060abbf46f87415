use std::sync::Once;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: Once = Once::new();
pub fn init_testing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .with_span_events(
                tracing_subscriber::fmt::format::FmtSpan::ENTER
                    | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
            )
            .finish()
            .init();
    });
}
