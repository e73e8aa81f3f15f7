mod peer_directory;

pub use peer_directory::PeerDirectory;

// Re-export for convenience
pub use tailnet_dns_domain::PeerSnapshot;
