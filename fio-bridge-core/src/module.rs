use crate::msg::{Dimensions, Message};
use fio_bridge_derive::Error;
use fio_bridge_wire::Transmission;
use log::trace;
use tokio::sync::mpsc;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    Disconnected,
}

/// Cloneable sending side of the module's inbound channel
#[derive(Clone, Debug)]
pub struct ModulePort {
    tx: mpsc::Sender<Transmission>,
}

impl ModulePort {
    pub fn new(tx: mpsc::Sender<Transmission>) -> Self {
        Self { tx }
    }

    /// Sends an enveloped message
    pub async fn post(&self, msg: Message) -> Result<(), SendError> {
        trace!("Posting to module: {:?}", msg);
        self.send(Transmission::from(msg)).await
    }

    /// Sends bytes with no subsystem or command wrapper
    pub async fn post_bytes(&self, bytes: Vec<u8>) -> Result<(), SendError> {
        trace!("Posting {} raw bytes to module", bytes.len());
        self.send(Transmission::from(bytes)).await
    }

    pub fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }

    async fn send(&self, transmission: Transmission) -> Result<(), SendError> {
        self.tx
            .send(transmission)
            .await
            .map_err(|_| SendError::Disconnected)
    }
}

/// Handle to a constructed module, created once the quota gate succeeds
///
/// Only the graphics branch of the dispatcher mutates it; everything else
/// sends through it.
#[derive(Debug)]
pub struct ModuleHandle {
    port: ModulePort,
    dimensions: Dimensions,
}

impl ModuleHandle {
    pub fn new(tx: mpsc::Sender<Transmission>) -> Self {
        Self {
            port: ModulePort::new(tx),
            dimensions: Dimensions::default(),
        }
    }

    pub fn port(&self) -> &ModulePort {
        &self.port
    }

    pub async fn post(&self, msg: Message) -> Result<(), SendError> {
        self.port.post(msg).await
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub(crate) fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }
}
