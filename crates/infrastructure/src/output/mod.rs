pub mod stderr_diagnostics;

pub use stderr_diagnostics::StderrDiagnostics;
