use std::sync::Once;

use rust_decimal::Decimal;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive(
            "bookkeeping_core=info"
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
        );

        // Logs go to stderr so report output on stdout stays machine-readable.
        // A host may already own the global subscriber; keep theirs.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Parses a user-supplied monetary amount.
///
/// Accepts either `.` or a single `,` as the decimal separator so that values
/// typed as `1500,50` behave like `1500.50`. Returns `None` for anything that
/// is not a plain decimal number.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse::<Decimal>().ok()
}
