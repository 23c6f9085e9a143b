use cnamescan_domain::Diagnostic;

/// Destination for human-facing diagnostics (the error stream).
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}
