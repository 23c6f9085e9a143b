use std::sync::Arc;

/// One unit of work: a normalized domain and the resolver it is assigned to.
/// Uses `Arc<str>` so the domain can be carried into findings without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanJob {
    pub domain: Arc<str>,
    pub server: Arc<str>,
}

impl ScanJob {
    pub fn new(domain: impl Into<Arc<str>>, server: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
            server: server.into(),
        }
    }

    /// Trims and lowercases a raw input line.
    ///
    /// Returns `None` for lines that are blank once trimmed.
    pub fn normalize_domain(line: &str) -> Option<Arc<str>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Arc::from(trimmed.to_lowercase()))
    }
}
