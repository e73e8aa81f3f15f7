use clap::Parser;
use tailnet_dns_domain::{CliOverrides, DirectoryBackend};
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "tailnet-dns")]
#[command(version)]
#[command(about = "Tailnet DNS - answers A, AAAA and PTR queries for tailnet peers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Also serve DNS over TCP
    #[arg(long)]
    tcp: bool,

    /// TTL of every answer, in seconds
    #[arg(long)]
    ttl: Option<u32>,

    /// Domain suffix for short-name matches (defaults to the tailnet's)
    #[arg(long)]
    domain: Option<String>,

    /// Peer directory backend (tailscale, file)
    #[arg(long, value_name = "BACKEND")]
    directory: Option<DirectoryBackend>,

    /// Roster file for the file backend
    #[arg(long, value_name = "FILE")]
    roster: Option<String>,

    /// tailscaled socket path
    #[arg(long, value_name = "PATH")]
    tailscale_socket: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log every reply in full
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        tcp: cli.tcp,
        ttl: cli.ttl,
        domain: cli.domain,
        directory_backend: cli.directory,
        roster_path: cli.roster,
        tailscale_socket: cli.tailscale_socket,
        log_level: cli.log_level,
        debug: cli.debug,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Tailnet DNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config);
    dns_services.log_available_nodes().await;

    let listen_addr = config.server.listen_address();
    let tcp_enabled = config.server.tcp_enabled;
    let handler = dns_services.handler;

    tokio::select! {
        result = server::start_dns_server(listen_addr, handler, tcp_enabled) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
