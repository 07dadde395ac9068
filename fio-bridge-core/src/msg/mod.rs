mod reply;
mod request;

pub use reply::{Dimensions, Reply, ReplyCode};
pub use request::{FileCommand, FileOperation, LOAD_URL_METHOD};

use fio_bridge_derive::Error;
use fio_bridge_wire::Transmission;
use std::fmt;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MsgError {
    WrongSubsystem { expected: Subsystem, actual: Subsystem },
    UnknownCommand { command: String },
    MissingField { index: usize },
}

/// Top-level routing key of a message, always the first wire field
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Subsystem {
    FileSystem,
    UrlFetch,
    Graphics,

    /// Any tag outside of the known set, kept verbatim so that it can be
    /// ignored without failing the decode
    Unrecognized(String),
}

impl Subsystem {
    pub const FILE_SYSTEM_TAG: &'static str = "FILEIO";
    pub const URL_FETCH_TAG: &'static str = "URLLOADER";
    pub const GRAPHICS_TAG: &'static str = "GRAPHICS";

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::FILE_SYSTEM_TAG => Self::FileSystem,
            Self::URL_FETCH_TAG => Self::UrlFetch,
            Self::GRAPHICS_TAG => Self::Graphics,
            x => Self::Unrecognized(x.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::FileSystem => Self::FILE_SYSTEM_TAG,
            Self::UrlFetch => Self::URL_FETCH_TAG,
            Self::Graphics => Self::GRAPHICS_TAG,
            Self::Unrecognized(x) => x,
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unit of communication with the module in both directions
///
/// The wire form is `[tag, command, ...args]`. Requests and replies share
/// the same shape; direction is implied by whoever produced the message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub subsystem: Subsystem,

    /// Token meaningful only within the subsystem; for replies it holds the
    /// status code chosen by the module
    pub command: String,

    pub args: Vec<String>,
}

impl Message {
    pub fn new(
        subsystem: Subsystem,
        command: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            subsystem,
            command: command.into(),
            args,
        }
    }

    /// Flattens into the positional wire form
    pub fn to_wire(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(self.args.len() + 2);
        fields.push(self.subsystem.tag().to_string());
        fields.push(self.command.clone());
        fields.extend(self.args.iter().cloned());
        fields
    }

    /// Extracts fields by position only; missing fields become an empty
    /// command and empty args rather than an error
    pub fn from_wire(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        let subsystem = Subsystem::from_tag(&fields.next().unwrap_or_default());
        let command = fields.next().unwrap_or_default();
        let args = fields.collect();

        Self {
            subsystem,
            command,
            args,
        }
    }

    /// Every field following the subsystem tag, in wire order
    pub fn payload(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(self.args.len() + 1);
        fields.push(self.command.clone());
        fields.extend(self.args.iter().cloned());
        fields
    }

    /// Decodes an enveloped transmission; raw byte transmissions carry no
    /// envelope and yield `None`
    pub fn from_transmission(transmission: Transmission) -> Option<Self> {
        transmission.into_fields().map(Self::from_wire)
    }
}

impl From<Message> for Transmission {
    fn from(msg: Message) -> Self {
        Self::from(msg.to_wire())
    }
}
