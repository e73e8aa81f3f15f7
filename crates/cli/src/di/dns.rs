use std::sync::Arc;
use tailnet_dns_application::ports::PeerDirectory;
use tailnet_dns_application::services::{AnswerBuilder, SnapshotFetcher};
use tailnet_dns_application::use_cases::{
    HandleDnsQueryUseCase, LookupAddressUseCase, LookupPointerUseCase,
};
use tailnet_dns_domain::{Config, DirectoryBackend};
use tailnet_dns_infrastructure::directory::{FileRosterDirectory, TailscaleStatusDirectory};
use tailnet_dns_infrastructure::dns::DnsServerHandler;
use tracing::{info, warn};

pub struct DnsServices {
    pub fetcher: Arc<SnapshotFetcher>,
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let directory = Self::build_directory(config);

        let fetcher = Arc::new(
            SnapshotFetcher::new(directory, config.dns.directory_timeout())
                .with_domain_override(config.dns.domain_suffix()),
        );
        let answers = AnswerBuilder::new(config.dns.ttl);

        let use_case = Arc::new(HandleDnsQueryUseCase::new(
            Arc::new(LookupAddressUseCase::new(fetcher.clone(), answers)),
            Arc::new(LookupPointerUseCase::new(fetcher.clone(), answers)),
        ));

        let handler = DnsServerHandler::new(use_case).with_verbose_replies(config.logging.debug);

        Self { fetcher, handler }
    }

    fn build_directory(config: &Config) -> Arc<dyn PeerDirectory> {
        let directory = &config.directory;
        info!(backend = %directory.backend, "Initializing peer directory");

        match directory.backend {
            DirectoryBackend::Tailscale => Arc::new(TailscaleStatusDirectory::new(
                directory.tailscale_bin.clone(),
                directory.tailscale_socket.clone(),
            )),
            // validate() rejects the file backend without a path
            DirectoryBackend::File => Arc::new(FileRosterDirectory::new(
                directory.roster_path.as_deref().unwrap_or_default(),
            )),
        }
    }

    /// Startup report only; a failure here does not stop the server.
    pub async fn log_available_nodes(&self) {
        match self.fetcher.fetch().await {
            Ok(snapshot) => {
                for entry in snapshot.entries.iter().filter(|e| e.is_named()) {
                    info!(name = %entry.name, addresses = ?entry.addresses, "Available node");
                }
                match snapshot.domain_suffix() {
                    Some(suffix) => info!(domain = suffix, nodes = snapshot.len(), "Domain detected"),
                    None => warn!("No domain suffix known, only full names will match"),
                }
            }
            Err(e) => warn!(error = %e, "Could not list tailnet nodes at startup"),
        }
    }
}
