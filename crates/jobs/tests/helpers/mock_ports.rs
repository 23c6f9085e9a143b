#![allow(dead_code)]

use async_trait::async_trait;
use cnamescan_application::ports::{CnameResolver, DiagnosticSink, HostResolver, ServerSelector};
use cnamescan_domain::{Diagnostic, DomainError, ResolverPool};
use std::collections::{HashMap, HashSet};
use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

// ============================================================================
// Table-driven CnameResolver
// ============================================================================

/// Answers from a fixed table. Unknown domains have no CNAME; domains in
/// `failing` always error. Each lookup can be slowed by `delay` to keep
/// queries in flight long enough to observe concurrency.
pub struct TableCnameResolver {
    cnames: HashMap<String, String>,
    failing: HashSet<String>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    servers_seen: Mutex<Vec<String>>,
}

impl TableCnameResolver {
    pub fn new(cnames: &[(&str, &str)]) -> Self {
        Self {
            cnames: cnames
                .iter()
                .map(|(d, c)| (d.to_string(), c.to_string()))
                .collect(),
            failing: HashSet::new(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            servers_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_failing(mut self, domains: &[&str]) -> Self {
        self.failing = domains.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn servers_seen(&self) -> Vec<String> {
        self.servers_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CnameResolver for TableCnameResolver {
    async fn lookup_cname(
        &self,
        domain: &str,
        server: &str,
    ) -> Result<Option<Arc<str>>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.servers_seen.lock().unwrap().push(server.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(domain) {
            return Err(DomainError::TransportTimeout {
                server: server.to_string(),
            });
        }
        Ok(self.cnames.get(domain).map(|c| Arc::from(c.as_str())))
    }
}

// ============================================================================
// Static HostResolver
// ============================================================================

#[derive(Default)]
pub struct StaticHostResolver {
    live: HashSet<String>,
}

impl StaticHostResolver {
    pub fn with_live_hosts(hosts: &[&str]) -> Self {
        Self {
            live: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticHostResolver {
    async fn resolves(&self, host: &str) -> bool {
        self.live.contains(host)
    }
}

// ============================================================================
// Selectors
// ============================================================================

/// Always picks the first pool entry.
pub struct FirstServerSelector;

impl ServerSelector for FirstServerSelector {
    fn select(&self, pool: &ResolverPool) -> Arc<str> {
        Arc::clone(&pool.servers()[0])
    }
}

/// Cycles through the pool in order.
#[derive(Default)]
pub struct RoundRobinSelector {
    next: AtomicUsize,
}

impl ServerSelector for RoundRobinSelector {
    fn select(&self, pool: &ResolverPool) -> Arc<str> {
        let i = self.next.fetch_add(1, Ordering::SeqCst) % pool.len();
        Arc::clone(&pool.servers()[i])
    }
}

// ============================================================================
// Recording DiagnosticSink
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingDiagnostics {
    reported: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> Vec<Diagnostic> {
        self.reported.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.reported().iter().map(|d| d.to_string()).collect()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reported.lock().unwrap().push(diagnostic.clone());
    }
}

// ============================================================================
// Faulty I/O
// ============================================================================

/// Yields `prefix`, then fails every read.
pub struct FailingReader {
    prefix: Vec<u8>,
    pos: usize,
}

impl FailingReader {
    pub fn after(prefix: &str) -> Self {
        Self {
            prefix: prefix.as_bytes().to_vec(),
            pos: 0,
        }
    }
}

impl AsyncRead for FailingReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        if self.pos < self.prefix.len() {
            let n = buf.remaining().min(self.prefix.len() - self.pos);
            let start = self.pos;
            buf.put_slice(&self.prefix[start..start + n]);
            self.pos += n;
            return Poll::Ready(Ok(()));
        }
        Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, "stream reset")))
    }
}

/// Rejects every write.
pub struct BrokenPipeWriter;

impl AsyncWrite for BrokenPipeWriter {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}
