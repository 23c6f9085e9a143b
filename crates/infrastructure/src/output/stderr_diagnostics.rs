use cnamescan_application::ports::DiagnosticSink;
use cnamescan_domain::Diagnostic;
use std::io::Write;
use tracing::warn;

/// Writes one diagnostic per line to the process's stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{}", diagnostic) {
            warn!(error = %e, "Failed to write diagnostic");
        }
    }
}
