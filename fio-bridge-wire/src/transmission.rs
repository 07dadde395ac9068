use serde::{Deserialize, Serialize};

/// Unit that physically crosses the module boundary in either direction
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Transmission {
    /// Envelope wire form: subsystem tag first, then positional fields
    Fields(Vec<String>),

    /// Raw payload with no envelope, used when streaming uploads
    Bytes(#[serde(with = "serde_bytes")] Vec<u8>),
}

impl Transmission {
    pub fn into_fields(self) -> Option<Vec<String>> {
        match self {
            Self::Fields(x) => Some(x),
            Self::Bytes(_) => None,
        }
    }
}

impl From<Vec<String>> for Transmission {
    fn from(fields: Vec<String>) -> Self {
        Self::Fields(fields)
    }
}

impl From<Vec<u8>> for Transmission {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}
