use bytes::Bytes;
use cnamescan_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::sync::Arc;
use tracing::debug;

/// What a CNAME query's response says about the queried name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CnameAnswer {
    /// Answer section carries a CNAME; target has its root dot stripped.
    /// Never empty.
    Target(Arc<str>),
    /// No CNAME, but an A record: the name resolves directly.
    DirectAddress,
    /// No answer, SOA in authority: definitive negative (NXDOMAIN / NODATA).
    AuthoritativeNegative,
    /// Nothing usable in either section, or a CNAME to the root.
    Empty,
}

impl CnameAnswer {
    pub fn into_target(self) -> Option<Arc<str>> {
        match self {
            CnameAnswer::Target(target) => Some(target),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    /// First CNAME target in the answer section, as sent (may be absolute).
    pub cname: Option<Arc<str>>,

    pub has_a_record: bool,

    pub has_soa_authority: bool,
}

impl DnsResponse {
    /// Interprets the response with CNAME > A > SOA > empty precedence.
    pub fn cname_answer(&self) -> CnameAnswer {
        if let Some(ref cname) = self.cname {
            let target = cname.strip_suffix('.').unwrap_or(cname);
            if target.is_empty() {
                return CnameAnswer::Empty;
            }
            return CnameAnswer::Target(Arc::from(target));
        }
        if self.has_a_record {
            return CnameAnswer::DirectAddress;
        }
        if self.has_soa_authority {
            return CnameAnswer::AuthoritativeNegative;
        }
        CnameAnswer::Empty
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses DNS response from owned bytes.
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let mut cname: Option<Arc<str>> = None;
        let mut has_a_record = false;

        for record in message.answers() {
            match record.data() {
                RData::CNAME(canonical) => {
                    if cname.is_none() {
                        // Wire form; punycode labels stay ASCII
                        let name = canonical.to_ascii();
                        debug!(cname = %name, "CNAME record found");
                        cname = Some(Arc::from(name.as_str()));
                    }
                }
                RData::A(_) => {
                    has_a_record = true;
                }
                _ => {}
            }
        }

        let has_soa_authority = message
            .name_servers()
            .iter()
            .any(|r| matches!(r.data(), RData::SOA(_)));

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            cname,
            has_a_record,
            has_soa_authority,
        };

        debug!(
            rcode = ?response.rcode,
            cname = ?response.cname,
            a_record = response.has_a_record,
            soa = response.has_soa_authority,
            "DNS response parsed"
        );

        Ok(response)
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
