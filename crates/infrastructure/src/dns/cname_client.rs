use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use cnamescan_application::ports::CnameResolver;
use cnamescan_domain::resolver_pool::parse_resolver_addr;
use cnamescan_domain::DomainError;
use hickory_proto::rr::RecordType;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Single-attempt CNAME lookup over UDP.
///
/// `server` is a resolver entry from the pool: a bare IP is queried on port
/// 53, an `ip:port` entry as given.
pub struct UdpCnameResolver {
    timeout: Duration,
}

impl UdpCnameResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Sends one CNAME query and returns the parsed response.
    pub async fn query(&self, domain: &str, server: &str) -> Result<DnsResponse, DomainError> {
        let start = Instant::now();
        let server_addr = parse_resolver_addr(server)?;
        let (id, query_bytes) = MessageBuilder::build_query_with_id(domain, RecordType::CNAME)?;

        let transport = UdpTransport::new(server_addr);
        let transport_response = transport.send(&query_bytes, self.timeout).await?;
        let response = ResponseParser::parse_bytes(Bytes::from(transport_response.bytes))?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response ID {} does not match query ID {}",
                response.id, id
            )));
        }

        debug!(
            %domain,
            server = %server_addr,
            status = ResponseParser::rcode_to_status(response.rcode),
            latency_ms = start.elapsed().as_millis() as u64,
            "CNAME query answered"
        );

        Ok(response)
    }
}

#[async_trait]
impl CnameResolver for UdpCnameResolver {
    async fn lookup_cname(
        &self,
        domain: &str,
        server: &str,
    ) -> Result<Option<Arc<str>>, DomainError> {
        let response = self.query(domain, server).await?;
        Ok(response.cname_answer().into_target())
    }
}
