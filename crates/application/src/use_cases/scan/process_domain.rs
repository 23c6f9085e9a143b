use super::LookupCnameUseCase;
use crate::ports::{CnameResolver, DiagnosticSink, HostResolver};
use crate::services::TakeoverClassifier;
use cnamescan_domain::{Diagnostic, Finding, ScanConfig, ScanJob};
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Findings for one domain, in emission order. At most two: `Dangling`
/// followed by `Takeover`.
pub type DomainFindings = SmallVec<[Finding; 2]>;

/// Use case: run one job through lookup, verification and classification.
///
/// ```text
/// Lookup ─┬─ failed ──────────────► (diagnostic if verbose)
///         ├─ no CNAME ────────────► (diagnostic if verbose)
///         └─ CNAME ─ Verify ─┬─ resolves ──► OK (verbose only)
///                            └─ dangling ──► DANGLING ─ Classify ─► TAKEOVER?
/// ```
pub struct ProcessDomainUseCase {
    lookup: LookupCnameUseCase,
    host_resolver: Arc<dyn HostResolver>,
    classifier: Arc<TakeoverClassifier>,
    diagnostics: Arc<dyn DiagnosticSink>,
    verbose: bool,
}

impl ProcessDomainUseCase {
    pub fn new(
        config: &ScanConfig,
        cname_resolver: Arc<dyn CnameResolver>,
        host_resolver: Arc<dyn HostResolver>,
        classifier: Arc<TakeoverClassifier>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            lookup: LookupCnameUseCase::new(cname_resolver, config.retries),
            host_resolver,
            classifier,
            diagnostics,
            verbose: config.verbose,
        }
    }

    /// Replaces the retrying lookup, e.g. to shorten backoff.
    pub fn with_lookup(mut self, lookup: LookupCnameUseCase) -> Self {
        self.lookup = lookup;
        self
    }

    #[instrument(skip(self, job), fields(domain = %job.domain, server = %job.server))]
    pub async fn execute(&self, job: &ScanJob) -> DomainFindings {
        let mut findings = DomainFindings::new();

        let cname = match self.lookup.execute(&job.domain, &job.server).await {
            Ok(Some(cname)) if !cname.is_empty() => cname,
            Ok(_) => {
                debug!("No CNAME");
                if self.verbose {
                    self.diagnostics.report(&Diagnostic::NoCname {
                        domain: Arc::clone(&job.domain),
                    });
                }
                return findings;
            }
            Err(e) => {
                debug!(error = %e, "Lookup failed");
                if self.verbose {
                    self.diagnostics.report(&Diagnostic::QueryFailed {
                        domain: Arc::clone(&job.domain),
                        error: e.to_string(),
                    });
                }
                return findings;
            }
        };

        if self.host_resolver.resolves(&cname).await {
            debug!(%cname, "CNAME target resolves");
            if self.verbose {
                findings.push(Finding::Ok {
                    domain: Arc::clone(&job.domain),
                    cname,
                });
            }
            return findings;
        }

        debug!(%cname, "CNAME target does not resolve");
        findings.push(Finding::Dangling {
            domain: Arc::clone(&job.domain),
            cname: Arc::clone(&cname),
        });

        if let Some(service) = self.classifier.classify(&cname) {
            debug!(%cname, %service, "Dangling CNAME matches takeover signature");
            findings.push(Finding::Takeover {
                domain: Arc::clone(&job.domain),
                cname,
                service,
            });
        }

        findings
    }
}
