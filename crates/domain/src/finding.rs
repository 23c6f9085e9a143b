use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    Ok,
    Dangling,
    Takeover,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Ok => "OK",
            FindingKind::Dangling => "DANGLING",
            FindingKind::Takeover => "TAKEOVER",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scanning a single domain.
///
/// `domain` is always the job's normalized input domain, never a name
/// returned by a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// CNAME target still resolves. Only produced in verbose mode.
    Ok { domain: Arc<str>, cname: Arc<str> },
    /// CNAME target does not resolve.
    Dangling { domain: Arc<str>, cname: Arc<str> },
    /// Dangling target matches a known takeover-prone service.
    Takeover {
        domain: Arc<str>,
        cname: Arc<str>,
        service: Arc<str>,
    },
}

impl Finding {
    pub fn kind(&self) -> FindingKind {
        match self {
            Finding::Ok { .. } => FindingKind::Ok,
            Finding::Dangling { .. } => FindingKind::Dangling,
            Finding::Takeover { .. } => FindingKind::Takeover,
        }
    }

    pub fn domain(&self) -> &str {
        match self {
            Finding::Ok { domain, .. }
            | Finding::Dangling { domain, .. }
            | Finding::Takeover { domain, .. } => domain,
        }
    }

    pub fn cname(&self) -> &str {
        match self {
            Finding::Ok { cname, .. }
            | Finding::Dangling { cname, .. }
            | Finding::Takeover { cname, .. } => cname,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Ok { domain, cname } => write!(f, "[OK] {} -> {}", domain, cname),
            Finding::Dangling { domain, cname } => {
                write!(f, "[DANGLING] {} -> {} (does not resolve)", domain, cname)
            }
            Finding::Takeover {
                domain,
                cname,
                service,
            } => write!(
                f,
                "[TAKEOVER] {} -> {} (vulnerable: {})",
                domain, cname, service
            ),
        }
    }
}
