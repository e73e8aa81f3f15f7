use super::ResourceRecord;

/// Reply assembled for one inbound message.
///
/// Replies are always authoritative and never offer recursion. A question
/// without a match contributes nothing to `answers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsReply {
    pub authoritative: bool,
    pub recursion_available: bool,
    pub answers: Vec<ResourceRecord>,
}

impl DnsReply {
    pub fn new() -> Self {
        Self {
            authoritative: true,
            recursion_available: false,
            answers: Vec::new(),
        }
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ResourceRecord>) {
        self.answers.extend(records);
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Default for DnsReply {
    fn default() -> Self {
        Self::new()
    }
}
