use super::{LookupAddressUseCase, LookupPointerUseCase};
use std::sync::Arc;
use tailnet_dns_domain::{DnsQuestion, DnsReply, RecordType};
use tracing::{debug, info};

/// Routes every question of a message to its lookup and gathers the answers
/// into one reply, in question order.
///
/// Failures never surface here: a question that cannot be answered simply
/// adds no records.
pub struct HandleDnsQueryUseCase {
    lookup_address: Arc<LookupAddressUseCase>,
    lookup_pointer: Arc<LookupPointerUseCase>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        lookup_address: Arc<LookupAddressUseCase>,
        lookup_pointer: Arc<LookupPointerUseCase>,
    ) -> Self {
        Self {
            lookup_address,
            lookup_pointer,
        }
    }

    pub async fn execute(&self, questions: &[DnsQuestion]) -> DnsReply {
        let mut reply = DnsReply::new();

        for question in questions {
            info!(domain = %question.name, record_type = %question.record_type, "DNS query received");

            let records = if question.record_type.is_address() {
                self.lookup_address.execute(question).await
            } else if question.record_type == RecordType::PTR {
                self.lookup_pointer.execute(question).await
            } else {
                debug!(record_type = %question.record_type, "Unsupported record type, no answers");
                Vec::new()
            };

            reply.extend(records);
        }

        reply
    }
}
