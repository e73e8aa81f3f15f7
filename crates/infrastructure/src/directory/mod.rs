//! Peer directory adapters.
pub mod roster_file;
pub mod tailscale;
pub mod tailscale_status;

pub use roster_file::FileRosterDirectory;
pub use tailscale::TailscaleStatusDirectory;
pub use tailscale_status::TailscaleStatus;
