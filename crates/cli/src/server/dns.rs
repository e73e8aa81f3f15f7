use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tailnet_dns_infrastructure::dns::DnsServerHandler;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

const MAX_UDP_MESSAGE: usize = 4096;

pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    tcp_enabled: bool,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
    let handler_udp = handler.clone();
    join_set.spawn(async move {
        run_udp_listener(udp_socket, handler_udp).await;
    });

    if tcp_enabled {
        let tcp_listener = create_tcp_listener(domain, socket_addr)?;
        let handler_tcp = handler.clone();
        join_set.spawn(async move {
            run_tcp_listener(tcp_listener, handler_tcp).await;
        });
    }

    info!(bind_address = %socket_addr, tcp = tcp_enabled, "DNS server listening");

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let handler_clone = handler.clone();
        let socket_clone = socket.clone();
        let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        tokio::spawn(async move {
            if let Some(response) = handler_clone.handle_raw(&owned_buf, from).await {
                if let Err(e) = socket_clone.send_to(&response, from).await {
                    warn!(client = %from, error = %e, "Failed to send reply");
                }
            }
        });
    }
}

async fn run_tcp_listener(listener: TcpListener, handler: Arc<DnsServerHandler>) {
    loop {
        match listener.accept().await {
            Ok((stream, from)) => {
                let handler_clone = handler.clone();
                tokio::spawn(async move {
                    if let Err(e) = serve_tcp_connection(stream, from, handler_clone).await {
                        debug!(client = %from, error = %e, "TCP connection closed");
                    }
                });
            }
            Err(e) => error!(error = %e, "TCP accept error"),
        }
    }
}

/// Messages on a stream carry a two-byte big-endian length prefix
/// (RFC 1035 §4.2.2).
async fn serve_tcp_connection(
    mut stream: TcpStream,
    from: SocketAddr,
    handler: Arc<DnsServerHandler>,
) -> io::Result<()> {
    loop {
        let len = match stream.read_u16().await {
            Ok(len) => len as usize,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e),
        };

        let mut query_buf = vec![0u8; len];
        stream.read_exact(&mut query_buf).await?;

        let Some(response) = handler.handle_raw(&query_buf, from).await else {
            return Ok(());
        };

        let response_len = u16::try_from(response.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "reply too large"))?;
        stream.write_u16(response_len).await?;
        stream.write_all(&response).await?;
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
