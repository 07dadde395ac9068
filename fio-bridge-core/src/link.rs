use fio_bridge_wire::{FrameReader, FrameWriter, Transmission, WireFormat};
use log::{error, trace};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Connects the bridge's channels to a framed byte stream leading to the
/// module, one task per direction
pub struct ModuleLink {
    inbound_handle: JoinHandle<()>,
    outbound_handle: JoinHandle<()>,
}

impl ModuleLink {
    /// Returns the link together with the sender feeding the module and the
    /// receiver of everything the module sends back
    pub fn spawn<R, W>(
        reader: R,
        writer: W,
        format: WireFormat,
        max_frame: usize,
        buffer: usize,
    ) -> (
        Self,
        mpsc::Sender<Transmission>,
        mpsc::Receiver<Transmission>,
    )
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (outbound_tx, mut outbound_rx) = mpsc::channel::<Transmission>(buffer);
        let (inbound_tx, inbound_rx) = mpsc::channel::<Transmission>(buffer);

        let mut frame_writer = FrameWriter::with_max_frame(writer, format, max_frame);
        let outbound_handle = tokio::spawn(async move {
            while let Some(transmission) = outbound_rx.recv().await {
                if let Err(x) = frame_writer.write(&transmission).await {
                    error!("Failed to write to module: {}", x);
                    break;
                }
            }
            trace!("Outbound link closed");
        });

        let mut frame_reader = FrameReader::with_max_frame(reader, format, max_frame);
        let inbound_handle = tokio::spawn(async move {
            loop {
                match frame_reader.read().await {
                    Ok(Some(transmission)) => {
                        if inbound_tx.send(transmission).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(x) => {
                        error!("Failed to read from module: {}", x);
                        break;
                    }
                }
            }
            trace!("Inbound link closed");
        });

        let link = Self {
            inbound_handle,
            outbound_handle,
        };
        (link, outbound_tx, inbound_rx)
    }

    /// Stops both directions
    pub fn abort(&self) {
        self.inbound_handle.abort();
        self.outbound_handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fio_bridge_wire::constants::DEFAULT_MAX_FRAME;

    #[tokio::test]
    async fn link_should_carry_frames_both_ways() {
        let (local, remote) = tokio::io::duplex(1024);
        let (local_read, local_write) = tokio::io::split(local);
        let (remote_read, remote_write) = tokio::io::split(remote);

        let (link, tx, mut rx) = ModuleLink::spawn(
            local_read,
            local_write,
            WireFormat::Piped,
            DEFAULT_MAX_FRAME,
            10,
        );

        let mut module_reader = FrameReader::new(remote_read, WireFormat::Piped);
        let mut module_writer = FrameWriter::new(remote_write, WireFormat::Piped);

        let request = Transmission::Fields(vec![String::from("FILEIO"), String::from("list"), String::from("/")]);
        tx.send(request.clone()).await.unwrap();
        assert_eq!(module_reader.read().await.unwrap(), Some(request));

        let reply = Transmission::Fields(vec![String::from("FILEIO"), String::from("READY")]);
        module_writer.write(&reply).await.unwrap();
        assert_eq!(rx.recv().await, Some(reply));

        link.abort();
    }
}
