use super::{Message, MsgError, Subsystem};
use std::convert::TryFrom;
use strum_macros::{AsRefStr, EnumString, EnumVariantNames};

/// Method prefix of the single combined field of a URL fetch request,
/// as in `getUrl:<resource>`
pub const LOAD_URL_METHOD: &str = "getUrl";

/// Commands the front-end may direct at the file system subsystem
///
/// Rename is deliberately absent: the module offers no reply contract for
/// it, so it is not sent until one exists.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumString, EnumVariantNames, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FileCommand {
    Save,
    Load,
    Delete,
    List,
    MakeDir,
}

/// Request variant carried to the file system subsystem
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// `data` may contain the transport field separator, in which case it
    /// does not survive the piped format intact
    Save { path: String, data: String },
    Load { path: String },
    Delete { path: String },
    List { path: String },
    MakeDir { path: String },
}

impl FileOperation {
    pub fn command(&self) -> FileCommand {
        match self {
            Self::Save { .. } => FileCommand::Save,
            Self::Load { .. } => FileCommand::Load,
            Self::Delete { .. } => FileCommand::Delete,
            Self::List { .. } => FileCommand::List,
            Self::MakeDir { .. } => FileCommand::MakeDir,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Save { path, .. }
            | Self::Load { path }
            | Self::Delete { path }
            | Self::List { path }
            | Self::MakeDir { path } => path,
        }
    }
}

impl From<FileOperation> for Message {
    fn from(op: FileOperation) -> Self {
        let command = op.command().as_ref().to_string();
        let args = match op {
            FileOperation::Save { path, data } => vec![path, data],
            FileOperation::Load { path }
            | FileOperation::Delete { path }
            | FileOperation::List { path }
            | FileOperation::MakeDir { path } => vec![path],
        };

        Message::new(Subsystem::FileSystem, command, args)
    }
}

impl TryFrom<&Message> for FileOperation {
    type Error = MsgError;

    fn try_from(msg: &Message) -> Result<Self, Self::Error> {
        if msg.subsystem != Subsystem::FileSystem {
            return Err(MsgError::WrongSubsystem {
                expected: Subsystem::FileSystem,
                actual: msg.subsystem.clone(),
            });
        }

        let command: FileCommand =
            msg.command.parse().map_err(|_| MsgError::UnknownCommand {
                command: msg.command.clone(),
            })?;
        let arg = |index: usize| {
            msg.args
                .get(index)
                .cloned()
                .ok_or(MsgError::MissingField { index: index + 2 })
        };

        Ok(match command {
            FileCommand::Save => Self::Save {
                path: arg(0)?,
                data: arg(1)?,
            },
            FileCommand::Load => Self::Load { path: arg(0)? },
            FileCommand::Delete => Self::Delete { path: arg(0)? },
            FileCommand::List => Self::List { path: arg(0)? },
            FileCommand::MakeDir => Self::MakeDir { path: arg(0)? },
        })
    }
}
