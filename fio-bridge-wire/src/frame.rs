use crate::{constants::DEFAULT_MAX_FRAME, DecodeError, EncodeError, Transmission, WireFormat};
use fio_bridge_derive::Error;
use log::trace;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Error)]
pub enum FrameError {
    Encode(EncodeError),
    Decode(DecodeError),
    IO(io::Error),
    TooLarge { size: usize, max: usize },
    UnexpectedEof,
}

impl From<EncodeError> for FrameError {
    fn from(x: EncodeError) -> Self {
        Self::Encode(x)
    }
}

impl From<DecodeError> for FrameError {
    fn from(x: DecodeError) -> Self {
        Self::Decode(x)
    }
}

/// Writes transmissions as length-prefixed frames: a 4-byte big-endian
/// length followed by the encoded payload
pub struct FrameWriter<W> {
    writer: W,
    format: WireFormat,
    max_frame: usize,
}

impl<W> FrameWriter<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(writer: W, format: WireFormat) -> Self {
        Self::with_max_frame(writer, format, DEFAULT_MAX_FRAME)
    }

    pub fn with_max_frame(writer: W, format: WireFormat, max_frame: usize) -> Self {
        Self {
            writer,
            format,
            max_frame,
        }
    }

    pub async fn write(&mut self, transmission: &Transmission) -> Result<(), FrameError> {
        let data = self.format.encode(transmission)?;
        if data.len() > self.max_frame || data.len() > u32::MAX as usize {
            return Err(FrameError::TooLarge {
                size: data.len(),
                max: self.max_frame,
            });
        }

        trace!("Writing frame of {} bytes", data.len());
        let len = data.len() as u32;
        self.writer
            .write_all(&len.to_be_bytes())
            .await
            .map_err(FrameError::IO)?;
        self.writer.write_all(&data).await.map_err(FrameError::IO)?;
        self.writer.flush().await.map_err(FrameError::IO)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reads length-prefixed frames produced by a `FrameWriter`
pub struct FrameReader<R> {
    reader: R,
    format: WireFormat,
    max_frame: usize,
}

impl<R> FrameReader<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(reader: R, format: WireFormat) -> Self {
        Self::with_max_frame(reader, format, DEFAULT_MAX_FRAME)
    }

    pub fn with_max_frame(reader: R, format: WireFormat, max_frame: usize) -> Self {
        Self {
            reader,
            format,
            max_frame,
        }
    }

    /// Reads the next transmission, yielding `None` on a clean end of stream
    pub async fn read(&mut self) -> Result<Option<Transmission>, FrameError> {
        let mut len_buf = [0u8; 4];
        match self.reader.read_exact(&mut len_buf).await {
            Ok(_) => {}
            Err(x) if x.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(x) => return Err(FrameError::IO(x)),
        }

        let len = u32::from_be_bytes(len_buf) as usize;
        if len > self.max_frame {
            return Err(FrameError::TooLarge {
                size: len,
                max: self.max_frame,
            });
        }

        let mut data = vec![0u8; len];
        self.reader.read_exact(&mut data).await.map_err(|x| {
            if x.kind() == io::ErrorKind::UnexpectedEof {
                FrameError::UnexpectedEof
            } else {
                FrameError::IO(x)
            }
        })?;

        trace!("Read frame of {} bytes", len);
        Ok(Some(self.format.decode(&data)?))
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
