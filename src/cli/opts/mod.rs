mod op;
mod parsers;

use super::format::FormatOption;
use clap::{Args, Parser, Subcommand};
use fio_bridge_core::{WireFormat, DEFAULT_QUOTA_BYTES};
use fio_bridge_wire::constants::DEFAULT_MAX_FRAME;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub use op::{Operation, Request};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prints the wire form of an operation without contacting a module
    #[clap(name = "encode")]
    Encode(EncodeCommand),

    /// Connects to a module, sends an operation and shows what comes back
    #[clap(name = "send")]
    Send(SendCommand),
}

#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct EncodeCommand {
    #[clap(subcommand)]
    pub op: Operation,

    /// Writes output to the given file instead of stdout
    #[clap(long)]
    pub redirect_stdout: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SendCommand {
    /// Address (<host>:<port>) of the module to connect to
    pub addr: SocketAddr,

    #[clap(subcommand)]
    pub op: Operation,

    #[clap(flatten)]
    pub opts: CommonOpts,

    /// Format used when printing replies (human or json)
    #[clap(long, default_value = "human")]
    pub output_format: FormatOption,

    /// Writes output to the given file instead of stdout
    #[clap(long)]
    pub redirect_stdout: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CommonOpts {
    /// Encoding of frames exchanged with the module (cbor or piped)
    #[clap(short, long, default_value = "cbor")]
    pub format: WireFormat,

    /// Seconds without traffic from the module before giving up on replies
    #[clap(
        long,
        parse(try_from_str = parsers::parse_duration_secs),
        default_value = "5"
    )]
    pub timeout: Duration,

    /// Bytes of persistent storage requested before the module is used
    #[clap(long, default_value_t = DEFAULT_QUOTA_BYTES)]
    pub quota: u64,

    /// Bytes of persistent storage the host is willing to grant
    #[clap(long, default_value_t = DEFAULT_QUOTA_BYTES)]
    pub capacity: u64,

    /// Largest frame accepted from or sent to the module
    #[clap(long, default_value_t = DEFAULT_MAX_FRAME)]
    pub max_frame: usize,

    /// Maximum size of internal message passing between reader, writer, and
    /// dispatch loops
    #[clap(long, default_value = "1000")]
    pub internal_buffer_size: usize,
}
