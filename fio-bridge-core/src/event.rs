use crate::{dispatch::Dispatcher, msg::Message, render::Renderer};
use fio_bridge_wire::Transmission;
use log::{error, trace};
use std::time::Duration;
use tokio::sync::mpsc;

/// Feeds transmissions from the module to a dispatcher strictly in arrival
/// order
pub struct EventLoop {
    inbound: mpsc::Receiver<Transmission>,
    idle_timeout: Option<Duration>,
}

impl EventLoop {
    pub fn new(inbound: mpsc::Receiver<Transmission>) -> Self {
        Self {
            inbound,
            idle_timeout: None,
        }
    }

    /// Stops once no transmission has arrived for `timeout`
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// Runs until the channel closes or the idle timeout elapses, returning
    /// how many messages were dispatched
    pub async fn run<R: Renderer + ?Sized>(
        &mut self,
        dispatcher: &mut Dispatcher,
        renderer: &mut R,
    ) -> usize {
        let mut count = 0;

        while let Some(transmission) = self.next().await {
            let msg = match Message::from_transmission(transmission) {
                Some(msg) => msg,
                None => {
                    trace!("Ignoring raw bytes from module");
                    continue;
                }
            };

            if let Err(x) = dispatcher.dispatch(msg, renderer).await {
                error!("Failed to dispatch message: {}", x);
            }
            count += 1;
        }

        count
    }

    async fn next(&mut self) -> Option<Transmission> {
        match self.idle_timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.inbound.recv())
                .await
                .ok()
                .flatten(),
            None => self.inbound.recv().await,
        }
    }
}
