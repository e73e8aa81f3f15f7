use crate::dns::wire;
use std::net::SocketAddr;
use std::sync::Arc;
use tailnet_dns_application::use_cases::HandleDnsQueryUseCase;
use tailnet_dns_domain::DnsReply;
use tracing::{debug, error, info, warn};

/// Turns one raw DNS message into one raw reply.
///
/// Transport-agnostic: the UDP and TCP listeners both hand it the bytes of
/// a single message.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    verbose_replies: bool,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self {
            use_case,
            verbose_replies: false,
        }
    }

    /// Log every reply record instead of only the answer count.
    pub fn with_verbose_replies(mut self, verbose: bool) -> Self {
        self.verbose_replies = verbose;
        self
    }

    /// Returns `None` when the message cannot be answered at all, i.e. it is
    /// not a parseable query.
    pub async fn handle_raw(&self, query_buf: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match wire::parse_request(query_buf) {
            Ok(request) => request,
            Err(e) => {
                warn!(client = %client, error = %e, "Dropping malformed DNS message");
                return None;
            }
        };

        let questions = wire::questions(&request);
        debug!(client = %client, id = request.id(), questions = questions.len(), "DNS message received");

        let reply = self.use_case.execute(&questions).await;
        self.log_reply(&reply, client);

        match wire::build_reply(&request, &reply) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(client = %client, error = %e, "Failed to encode reply, answering empty");
                wire::build_reply(&request, &DnsReply::new())
                    .map_err(|e| error!(error = %e, "Failed to encode empty reply"))
                    .ok()
            }
        }
    }

    fn log_reply(&self, reply: &DnsReply, client: SocketAddr) {
        if self.verbose_replies {
            let records: Vec<String> = reply.answers.iter().map(ToString::to_string).collect();
            debug!(client = %client, answers = ?records, "Response");
        } else {
            info!(client = %client, answers = reply.answers.len(), "Response sent");
        }
    }
}
