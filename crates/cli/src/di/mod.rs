use cnamescan_application::ports::{CnameResolver, DiagnosticSink, HostResolver, ServerSelector};
use cnamescan_application::services::TakeoverClassifier;
use cnamescan_application::use_cases::ProcessDomainUseCase;
use cnamescan_domain::{Config, ScanConfig};
use cnamescan_infrastructure::dns::UdpCnameResolver;
use cnamescan_infrastructure::output::StderrDiagnostics;
use cnamescan_infrastructure::system::{FastrandSelector, SystemHostResolver};
use cnamescan_jobs::ScanRunner;
use std::sync::Arc;
use tracing::info;

/// Production adapters wired into the scan pipeline.
pub struct ScanServices {
    pub config: Arc<ScanConfig>,
    pub process: Arc<ProcessDomainUseCase>,
    pub selector: Arc<dyn ServerSelector>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

impl ScanServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let scan_config = Arc::new(config.scan_config()?);
        let classifier = Arc::new(TakeoverClassifier::new(&config.signatures())?);

        let cname_resolver: Arc<dyn CnameResolver> =
            Arc::new(UdpCnameResolver::new(scan_config.timeout));
        let host_resolver: Arc<dyn HostResolver> =
            Arc::new(SystemHostResolver::new(scan_config.timeout));
        let diagnostics: Arc<dyn DiagnosticSink> = Arc::new(StderrDiagnostics);

        info!(
            signatures = classifier.len(),
            resolvers = scan_config.resolvers.len(),
            "Scan services initialized"
        );

        let process = Arc::new(ProcessDomainUseCase::new(
            &scan_config,
            cname_resolver,
            host_resolver,
            classifier,
            Arc::clone(&diagnostics),
        ));

        Ok(Self {
            config: scan_config,
            process,
            selector: Arc::new(FastrandSelector),
            diagnostics,
        })
    }

    pub fn into_runner(self) -> ScanRunner {
        ScanRunner::new(self.config, self.process, self.selector, self.diagnostics)
    }
}
