use crate::module::ModulePort;
use chrono::{DateTime, Utc};
use futures::future::{self, BoxFuture, FutureExt};
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};

/// One locally selected file awaiting transfer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadItem {
    pub name: String,
    pub mime_type: Option<String>,
    pub size_bytes: u64,
    pub last_modified: Option<DateTime<Utc>>,

    /// Where the contents are read from
    pub source: PathBuf,
}

impl UploadItem {
    /// Collects name, size and modification time from the file's metadata
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;

        Ok(Self {
            name: path
                .file_name()
                .map(|x| x.to_string_lossy().to_string())
                .unwrap_or_default(),
            mime_type: guess_mime_type(path).map(String::from),
            size_bytes: metadata.len(),
            last_modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            source: path.to_path_buf(),
        })
    }

    /// Line shown in the picker listing
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) - {} bytes, last modified: {}",
            self.name,
            self.mime_type.as_deref().unwrap_or("n/a"),
            self.size_bytes,
            self.last_modified
                .map(|x| x.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| String::from("n/a")),
        )
    }
}

fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    Some(match ext.as_str() {
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "bmp" => "image/bmp",
        "png" => "image/png",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return None,
    })
}

/// Asynchronous binary read of an item's contents
pub trait ContentReader {
    fn read<'a>(&'a self, item: &'a UploadItem) -> BoxFuture<'a, io::Result<Vec<u8>>>;
}

/// Reads contents from the local file system
#[derive(Copy, Clone, Debug, Default)]
pub struct FsReader;

impl ContentReader for FsReader {
    fn read<'a>(&'a self, item: &'a UploadItem) -> BoxFuture<'a, io::Result<Vec<u8>>> {
        tokio::fs::read(&item.source).boxed()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub sent: usize,

    /// Read completed but there was no module to receive it
    pub dropped: usize,

    pub failed: usize,
}

enum Outcome {
    Sent,
    Dropped,
    Failed,
}

/// Reads every selected item concurrently and posts each one's bytes to the
/// module as its read completes, bypassing the message envelope
pub struct UploadStreamer<C> {
    reader: C,
}

impl<C: ContentReader> UploadStreamer<C> {
    pub fn new(reader: C) -> Self {
        Self { reader }
    }

    /// Completions may arrive in any order; each transfer owns its item and
    /// buffer so contents are never paired with the wrong item
    pub async fn stream(&self, items: Vec<UploadItem>, port: Option<&ModulePort>) -> UploadReport {
        let transfers = items.into_iter().map(|item| self.transfer(item, port));

        future::join_all(transfers)
            .await
            .into_iter()
            .fold(UploadReport::default(), |mut report, outcome| {
                match outcome {
                    Outcome::Sent => report.sent += 1,
                    Outcome::Dropped => report.dropped += 1,
                    Outcome::Failed => report.failed += 1,
                }
                report
            })
    }

    async fn transfer(&self, item: UploadItem, port: Option<&ModulePort>) -> Outcome {
        let bytes = match self.reader.read(&item).await {
            Ok(x) => x,
            Err(x) => {
                warn!("Failed to read {}: {}", item.name, x);
                return Outcome::Failed;
            }
        };

        // The module may have gone away while the read was in flight
        let sent = match port {
            Some(port) => port.post_bytes(bytes).await.is_ok(),
            None => false,
        };

        if sent {
            debug!("Uploaded {}", item.name);
            Outcome::Sent
        } else {
            debug!("No module to receive {}, dropping", item.name);
            Outcome::Dropped
        }
    }
}

impl Default for UploadStreamer<FsReader> {
    fn default() -> Self {
        Self::new(FsReader)
    }
}
