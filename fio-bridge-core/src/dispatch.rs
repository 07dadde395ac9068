use crate::{
    module::ModuleHandle,
    msg::{Message, Reply},
    projector::ResultProjector,
    relay::{RelayError, UrlFetchRelay},
    render::Renderer,
};
use fio_bridge_derive::Error;
use log::{debug, trace};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    Relay(RelayError),
}

/// Routes decoded replies by subsystem and command
///
/// The router keeps no memory between messages. Replies carry no request
/// id, so a `LIST` or `DISP` is assumed to answer the most recent matching
/// request; overlapping requests of the same kind cannot be told apart.
pub struct Dispatcher {
    module: ModuleHandle,
}

impl Dispatcher {
    pub const READY_LINE: &'static str = "Filesystem ready!";

    pub fn new(module: ModuleHandle) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &ModuleHandle {
        &self.module
    }

    /// Unknown tags and commands are ignored; the only failure is a relayed
    /// save that could not reach the module
    pub async fn dispatch<R: Renderer + ?Sized>(
        &mut self,
        msg: Message,
        renderer: &mut R,
    ) -> Result<(), DispatchError> {
        trace!("Dispatching: {:?}", msg);

        match Reply::from(msg) {
            Reply::Error(text) => renderer.log(&format!("Error: {}", text)),
            Reply::Status(text) => renderer.log(&text),
            Reply::Ready => renderer.log(Self::READY_LINE),
            Reply::Display(fields) => {
                let text = ResultProjector::text(ResultProjector::rejoin(&fields));
                renderer.show_text(&text);
            }
            Reply::Listing(entries) => {
                renderer.show_list(&ResultProjector::listing(entries));
            }
            Reply::Fetched(payload) => {
                UrlFetchRelay::relay(&self.module, &payload, renderer)
                    .await
                    .map_err(DispatchError::Relay)?;
            }
            Reply::Dimensions(dimensions) => {
                self.module.set_dimensions(dimensions);
                renderer.show_dimensions(dimensions);
            }
            Reply::Unrecognized(msg) => {
                debug!("Ignoring unrecognized message: {:?}", msg);
            }
        }

        Ok(())
    }
}
