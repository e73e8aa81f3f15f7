use std::fmt;
use std::str::FromStr;

/// Question types the responder distinguishes.
///
/// Anything other than A, AAAA and PTR is carried as `Other` with its numeric
/// type code so it can still be logged; such questions are answered empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    PTR,
    Other(u16),
}

impl RecordType {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            12 => RecordType::PTR,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }

    /// True for the two forward-lookup types.
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::PTR => f.write_str("PTR"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "PTR" => Ok(RecordType::PTR),
            _ => upper
                .strip_prefix("TYPE")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordType::from_code)
                .ok_or_else(|| format!("Unknown record type: {}", s)),
        }
    }
}
