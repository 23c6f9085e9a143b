mod lookup_cname;
mod process_domain;

pub use lookup_cname::{LookupCnameUseCase, BACKOFF_STEP};
pub use process_domain::{DomainFindings, ProcessDomainUseCase};
