use super::{Message, Subsystem};
use crate::projector::ResultProjector;
use derive_more::Display;
use strum_macros::{AsRefStr, EnumString};

/// Status codes the module places in the command position of a file
/// system reply
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumString, AsRefStr)]
pub enum ReplyCode {
    #[strum(serialize = "ERR")]
    Error,

    #[strum(serialize = "STAT")]
    Status,

    #[strum(serialize = "READY")]
    Ready,

    #[strum(serialize = "DISP")]
    Display,

    #[strum(serialize = "LIST")]
    List,
}

/// Command of the graphics subsystem carrying new dimensions
pub const DIMENSIONS_COMMAND: &str = "WH";

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq)]
#[display(fmt = "{}x{}", width, height)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Typed view of a message arriving from the module
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Error reported by the module; never retried
    Error(String),

    /// Informational status line
    Status(String),

    /// The module's file system finished opening
    Ready,

    /// File contents split across however many fields the transport
    /// produced
    Display(Vec<String>),

    /// Directory entry names in the order the module listed them
    Listing(Vec<String>),

    /// Fields following the URL fetch tag, the first holding `<url>\n<body>`
    Fetched(Vec<String>),

    Dimensions(Dimensions),

    /// Anything outside the known tag and command set
    Unrecognized(Message),
}

impl From<Message> for Reply {
    fn from(msg: Message) -> Self {
        match msg.subsystem {
            Subsystem::FileSystem => match msg.command.parse::<ReplyCode>() {
                Ok(ReplyCode::Error) => Self::Error(ResultProjector::rejoin(&msg.args)),
                Ok(ReplyCode::Status) => Self::Status(ResultProjector::rejoin(&msg.args)),
                Ok(ReplyCode::Ready) => Self::Ready,
                Ok(ReplyCode::Display) => Self::Display(msg.args),
                Ok(ReplyCode::List) => Self::Listing(msg.args),
                Err(_) => Self::Unrecognized(msg),
            },
            Subsystem::UrlFetch => Self::Fetched(msg.payload()),
            Subsystem::Graphics if msg.command == DIMENSIONS_COMMAND => {
                match parse_dimensions(&msg.args) {
                    Some(dimensions) => Self::Dimensions(dimensions),
                    None => Self::Unrecognized(msg),
                }
            }
            Subsystem::Graphics | Subsystem::Unrecognized(_) => Self::Unrecognized(msg),
        }
    }
}

fn parse_dimensions(args: &[String]) -> Option<Dimensions> {
    let width = args.get(0)?.trim().parse().ok()?;
    let height = args.get(1)?.trim().parse().ok()?;
    Some(Dimensions { width, height })
}
