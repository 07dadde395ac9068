use crate::msg::{FileCommand, FileOperation, Message, Subsystem, LOAD_URL_METHOD};
use fio_bridge_derive::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    EmptyPath { command: FileCommand },
    EmptyResource,
}

/// Constructs outbound messages, validating arguments before encoding
///
/// Builders never touch the module; sending is left to the caller. There is
/// no rename constructor because the module has no reply contract for it.
pub struct CommandBuilder;

impl CommandBuilder {
    /// Validates and encodes any file operation
    pub fn build(op: FileOperation) -> Result<Message, CommandError> {
        if op.path().is_empty() {
            return Err(CommandError::EmptyPath {
                command: op.command(),
            });
        }

        Ok(Message::from(op))
    }

    /// `data` may be empty, which truncates the file on the module side
    pub fn save(
        path: impl Into<String>,
        data: impl Into<String>,
    ) -> Result<Message, CommandError> {
        Self::build(FileOperation::Save {
            path: path.into(),
            data: data.into(),
        })
    }

    pub fn load(path: impl Into<String>) -> Result<Message, CommandError> {
        Self::build(FileOperation::Load { path: path.into() })
    }

    pub fn delete(path: impl Into<String>) -> Result<Message, CommandError> {
        Self::build(FileOperation::Delete { path: path.into() })
    }

    pub fn list(path: impl Into<String>) -> Result<Message, CommandError> {
        Self::build(FileOperation::List { path: path.into() })
    }

    pub fn makedir(path: impl Into<String>) -> Result<Message, CommandError> {
        Self::build(FileOperation::MakeDir { path: path.into() })
    }

    /// Asks the module to download `resource` on the front-end's behalf
    ///
    /// Unlike file system requests this carries a single combined
    /// `getUrl:<resource>` field in place of a separate command.
    pub fn fetch_url(
        resource: &str,
        target_path: impl Into<String>,
    ) -> Result<Message, CommandError> {
        if resource.is_empty() {
            return Err(CommandError::EmptyResource);
        }

        Ok(Message::new(
            Subsystem::UrlFetch,
            format!("{}:{}", LOAD_URL_METHOD, resource),
            vec![target_path.into()],
        ))
    }
}
