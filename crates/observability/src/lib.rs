//! Process-wide tracing setup shared by every POS host.

/// Initialize structured logging with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize structured logging, using `default_filter` when `RUST_LOG` is unset.
pub fn init_with_default(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
