pub mod scan;

pub use scan::{LookupCnameUseCase, ProcessDomainUseCase};
