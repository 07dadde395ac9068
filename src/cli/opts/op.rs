use clap::Subcommand;
use fio_bridge_core::{CommandBuilder, CommandError, Message};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Operation {
    /// Writes data to a file, replacing what was there
    #[clap(name = "save")]
    Save { path: String, data: String },

    /// Reads a file and shows its contents
    #[clap(name = "load")]
    Load { path: String },

    /// Removes a file or directory
    #[clap(name = "delete")]
    Delete { path: String },

    /// Shows the entries of a directory
    #[clap(name = "list")]
    List { path: String },

    /// Creates a directory
    #[clap(name = "makedir")]
    MakeDir { path: String },

    /// Has the module download a resource, which is then saved under `/`
    #[clap(name = "fetch")]
    Fetch { resource: String, target: String },

    /// Streams local files to the module as raw bytes
    #[clap(name = "upload")]
    Upload {
        #[clap(required = true)]
        files: Vec<PathBuf>,
    },
}

/// What an operation turns into once validated
#[derive(Debug)]
pub enum Request {
    Message(Message),
    Upload(Vec<PathBuf>),
}

impl Operation {
    pub fn into_request(self) -> Result<Request, CommandError> {
        let msg = match self {
            Self::Save { path, data } => CommandBuilder::save(path, data)?,
            Self::Load { path } => CommandBuilder::load(path)?,
            Self::Delete { path } => CommandBuilder::delete(path)?,
            Self::List { path } => CommandBuilder::list(path)?,
            Self::MakeDir { path } => CommandBuilder::makedir(path)?,
            Self::Fetch { resource, target } => CommandBuilder::fetch_url(&resource, target)?,
            Self::Upload { files } => return Ok(Request::Upload(files)),
        };

        Ok(Request::Message(msg))
    }
}
