use aho_corasick::{AhoCorasick, MatchKind};
use cnamescan_domain::{DomainError, ServiceSignature};
use std::sync::Arc;
use tracing::debug;

/// Matches dangling CNAME targets against the takeover signature table.
///
/// Precedence is table order, not position in the target: when several
/// patterns occur in a target, the one declared first wins. All patterns
/// are found in one pass with overlapping Aho-Corasick search and the
/// lowest pattern index is kept.
pub struct TakeoverClassifier {
    automaton: AhoCorasick,
    services: Vec<Arc<str>>,
}

impl TakeoverClassifier {
    pub fn new(signatures: &[ServiceSignature]) -> Result<Self, DomainError> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(signatures.iter().map(|s| s.pattern.as_str()))
            .map_err(|e| DomainError::InvalidSignatures(e.to_string()))?;

        let services = signatures
            .iter()
            .map(|s| Arc::from(s.service.as_str()))
            .collect();

        debug!(patterns = signatures.len(), "Takeover classifier compiled");

        Ok(Self {
            automaton,
            services,
        })
    }

    /// Classifier over the built-in table only.
    pub fn with_defaults() -> Result<Self, DomainError> {
        Self::new(&ServiceSignature::defaults())
    }

    /// Service name of the first table entry contained in `cname`.
    pub fn classify(&self, cname: &str) -> Option<Arc<str>> {
        let target = cname.to_lowercase();
        self.automaton
            .find_overlapping_iter(&target)
            .map(|m| m.pattern().as_usize())
            .min()
            .map(|index| Arc::clone(&self.services[index]))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
