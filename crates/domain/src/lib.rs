//! Tailnet DNS Domain Layer
pub mod config;
pub mod dns_name;
pub mod dns_question;
pub mod dns_record;
pub mod dns_reply;
pub mod errors;
pub mod reverse_address;
pub mod roster;

pub use config::{CliOverrides, Config, ConfigError, DirectoryBackend};
pub use dns_name::{first_label, normalize_name};
pub use dns_question::DnsQuestion;
pub use dns_record::{RecordType, ResourceRecord};
pub use dns_reply::DnsReply;
pub use errors::DomainError;
pub use reverse_address::{decode_reverse_name, to_reverse_name};
pub use roster::{PeerSnapshot, RosterEntry};
