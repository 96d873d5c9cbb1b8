//! Utility functions for tracing

/// Create a span for one CLI command
///
/// # Example
///
/// ```rust
/// use palettize_observability::command_span;
///
/// let span = command_span!("template");
/// let _guard = span.enter();
/// // ... command body ...
/// ```
#[macro_export]
macro_rules! command_span {
    ($command:expr) => {
        tracing::info_span!(
            "palettize.command",
            command = $command,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// Marks the span failed and logs the message at debug level; user-facing
/// reporting is left to the caller.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    tracing::debug!(error = %error, "Command failed");
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use palettize_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... operation ...
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
