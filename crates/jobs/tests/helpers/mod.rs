mod mock_ports;

pub use mock_ports::*;

use cnamescan_application::services::TakeoverClassifier;
use cnamescan_application::use_cases::{LookupCnameUseCase, ProcessDomainUseCase};
use cnamescan_domain::{ResolverPool, ScanConfig};
use std::sync::Arc;
use std::time::Duration;

pub fn scan_config(concurrency: usize, verbose: bool) -> ScanConfig {
    ScanConfig {
        concurrency,
        timeout: Duration::from_secs(1),
        retries: 2,
        verbose,
        resolvers: ResolverPool::new(["10.0.0.1", "10.0.0.2"]).unwrap(),
    }
}

/// Per-domain use case over the given stubs, with a 1ms backoff step so
/// failing lookups do not slow the tests down.
pub fn process_domain(
    config: &ScanConfig,
    cnames: Arc<TableCnameResolver>,
    hosts: Arc<StaticHostResolver>,
    diagnostics: RecordingDiagnostics,
) -> Arc<ProcessDomainUseCase> {
    let lookup = LookupCnameUseCase::new(cnames.clone(), config.retries)
        .with_backoff_step(Duration::from_millis(1));

    Arc::new(
        ProcessDomainUseCase::new(
            config,
            cnames,
            hosts,
            Arc::new(TakeoverClassifier::with_defaults().unwrap()),
            Arc::new(diagnostics),
        )
        .with_lookup(lookup),
    )
}
