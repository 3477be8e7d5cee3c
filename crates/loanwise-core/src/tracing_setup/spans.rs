//! Span definitions per operation: reconcile, inference.

/// Create a reconciliation span.
#[macro_export]
macro_rules! reconcile_span {
    ($schema_len:expr, $policy:expr) => {
        tracing::info_span!("loanwise.reconcile", schema_len = $schema_len, policy = %$policy)
    };
}

/// Create an inference span.
#[macro_export]
macro_rules! inference_span {
    ($service:expr) => {
        tracing::info_span!("loanwise.inference", service = %$service)
    };
}
