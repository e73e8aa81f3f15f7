use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid reverse lookup name: {0}")]
    InvalidReverseName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Peer directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Peer directory timeout after {0}ms")]
    DirectoryTimeout(u64),
}
