mod command;
mod dispatch;
mod event;
mod link;
mod module;
mod msg;
mod projector;
mod quota;
mod relay;
mod render;
mod upload;

pub use command::{CommandBuilder, CommandError};
pub use dispatch::{DispatchError, Dispatcher};
pub use event::EventLoop;
pub use link::ModuleLink;
pub use module::{ModuleHandle, ModulePort, SendError};
pub use msg::{
    Dimensions, FileCommand, FileOperation, Message, MsgError, Reply, ReplyCode,
    Subsystem, LOAD_URL_METHOD,
};
pub use projector::{ResultProjector, EMPTY_DIRECTORY};
pub use quota::{
    open_module, QuotaDenied, QuotaHost, SessionError, StaticQuota, DEFAULT_QUOTA_BYTES,
};
pub use relay::{FetchResult, RelayError, UrlFetchRelay};
pub use render::{RecordingRenderer, RenderEvent, Renderer};
pub use upload::{ContentReader, FsReader, UploadItem, UploadReport, UploadStreamer};

// Re-export the transport-level types used at the module boundary
pub use fio_bridge_wire::{Transmission, WireFormat};
