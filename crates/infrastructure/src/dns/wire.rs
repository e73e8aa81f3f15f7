//! DNS wire format for inbound queries and synthesized replies.
//!
//! Parsing and serialization go through `hickory-proto`; this module only
//! translates between its message types and the domain types.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, AAAA, PTR};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use tailnet_dns_domain::{DnsQuestion, DnsReply, DomainError, ResourceRecord};

/// Parse an inbound datagram. Only standard queries are accepted: responses
/// are never answered, and other opcodes (NOTIFY, UPDATE, ...) are dropped.
pub fn parse_request(bytes: &[u8]) -> Result<Message, DomainError> {
    let message = Message::from_vec(bytes)
        .map_err(|e| DomainError::InvalidDnsMessage(format!("Failed to parse query: {}", e)))?;

    if message.message_type() != MessageType::Query {
        return Err(DomainError::InvalidDnsMessage(
            "Message is not a query".to_string(),
        ));
    }

    if message.op_code() != OpCode::Query {
        return Err(DomainError::InvalidDnsMessage(format!(
            "Unsupported opcode {:?}",
            message.op_code()
        )));
    }

    Ok(message)
}

/// All questions of a message, in order.
pub fn questions(message: &Message) -> Vec<DnsQuestion> {
    message
        .queries()
        .iter()
        .map(|query| {
            DnsQuestion::new(
                query.name().to_ascii(),
                RecordTypeMapper::from_hickory(query.query_type()),
            )
        })
        .collect()
}

/// Build the wire reply for `request`: same ID, opcode and question
/// section, RD copied, AA set, RA cleared, NOERROR.
pub fn build_reply(request: &Message, reply: &DnsReply) -> Result<Vec<u8>, DomainError> {
    let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
    response.set_recursion_desired(request.recursion_desired());
    response.set_authoritative(reply.authoritative);
    response.set_recursion_available(reply.recursion_available);

    for query in request.queries() {
        response.add_query(query.clone());
    }

    for record in &reply.answers {
        response.add_answer(to_hickory_record(record)?);
    }

    serialize_message(&response)
}

/// Convert a synthesized record into a hickory `Record` of class IN.
pub fn to_hickory_record(record: &ResourceRecord) -> Result<Record, DomainError> {
    let name = parse_name(record.name())?;

    let rdata = match record {
        ResourceRecord::A { address, .. } => RData::A(A(*address)),
        ResourceRecord::AAAA { address, .. } => RData::AAAA(AAAA(*address)),
        ResourceRecord::PTR { target, .. } => RData::PTR(PTR(parse_name(target)?)),
    };

    Ok(Record::from_rdata(name, record.ttl(), rdata))
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e)))
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}
