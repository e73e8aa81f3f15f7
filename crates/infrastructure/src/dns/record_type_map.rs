//! Mapping from `hickory_proto::rr::RecordType` to `tailnet_dns_domain::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use tailnet_dns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert the type of an incoming question.
    ///
    /// Every type maps to something; unsupported ones keep their code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_code(u16::from(hickory_type))
    }
}
