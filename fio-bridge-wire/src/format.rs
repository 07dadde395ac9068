use crate::{constants::FIELD_SEPARATOR, Transmission};
use fio_bridge_derive::Error;
use strum_macros::{AsRefStr, EnumString, EnumVariantNames};

/// Leading byte marking a piped frame as raw bytes instead of fields
const PIPED_BYTES_MARKER: u8 = 0x00;

#[derive(Debug, Error)]
pub enum EncodeError {
    Cbor(serde_cbor::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    Cbor(serde_cbor::Error),
    InvalidUtf8(std::str::Utf8Error),
}

/// Encoding applied to a transmission before it is framed
///
/// `Piped` concatenates fields with `|` and performs no escaping, so any
/// field containing `|` arrives on the far side as several fields. Changing
/// that would change the wire format and needs a protocol version bump.
/// Raw bytes are marked by a leading `\0`, so a fields frame whose first
/// field starts with `\0` is read back as raw bytes.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumString, EnumVariantNames, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum WireFormat {
    Cbor,
    Piped,
}

impl Default for WireFormat {
    fn default() -> Self {
        Self::Cbor
    }
}

impl WireFormat {
    pub fn encode(self, transmission: &Transmission) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::Cbor => serde_cbor::to_vec(transmission).map_err(EncodeError::Cbor),
            Self::Piped => Ok(match transmission {
                Transmission::Fields(fields) => {
                    fields.join(FIELD_SEPARATOR).into_bytes()
                }
                Transmission::Bytes(bytes) => {
                    let mut data = Vec::with_capacity(bytes.len() + 1);
                    data.push(PIPED_BYTES_MARKER);
                    data.extend_from_slice(bytes);
                    data
                }
            }),
        }
    }

    pub fn decode(self, data: &[u8]) -> Result<Transmission, DecodeError> {
        match self {
            Self::Cbor => serde_cbor::from_slice(data).map_err(DecodeError::Cbor),
            Self::Piped => match data.split_first() {
                Some((&PIPED_BYTES_MARKER, bytes)) => Ok(Transmission::Bytes(bytes.to_vec())),
                Some(_) => {
                    let text = std::str::from_utf8(data).map_err(DecodeError::InvalidUtf8)?;
                    Ok(Transmission::Fields(
                        text.split(FIELD_SEPARATOR).map(String::from).collect(),
                    ))
                }
                None => Ok(Transmission::Fields(Vec::new())),
            },
        }
    }
}
