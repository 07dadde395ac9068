use crate::{module::ModuleHandle, render::Renderer};
use fio_bridge_derive::Error;
use fio_bridge_wire::Transmission;
use futures::future::{self, BoxFuture};
use log::{info, warn};
use tokio::sync::mpsc;

/// Persistent storage requested before the module may be constructed
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub struct QuotaDenied {
    pub requested: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    QuotaDenied(QuotaDenied),
}

/// Host environment that hands out persistent storage, once
pub trait QuotaHost {
    /// Resolves to the granted byte count
    fn request_quota(&self, bytes: u64) -> BoxFuture<'_, Result<u64, QuotaDenied>>;
}

/// Grants any request that fits within a fixed capacity
#[derive(Copy, Clone, Debug)]
pub struct StaticQuota {
    capacity: u64,
}

impl StaticQuota {
    pub fn new(capacity: u64) -> Self {
        Self { capacity }
    }
}

impl Default for StaticQuota {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTA_BYTES)
    }
}

impl QuotaHost for StaticQuota {
    fn request_quota(&self, bytes: u64) -> BoxFuture<'_, Result<u64, QuotaDenied>> {
        let result = if bytes <= self.capacity {
            Ok(bytes)
        } else {
            Err(QuotaDenied { requested: bytes })
        };

        Box::pin(future::ready(result))
    }
}

/// Passes the quota gate and only then constructs the module handle
///
/// A denial is shown as an alert and is final; nothing retries it.
pub async fn open_module<H, R>(
    host: &H,
    requested: u64,
    outbound: mpsc::Sender<Transmission>,
    renderer: &mut R,
) -> Result<ModuleHandle, SessionError>
where
    H: QuotaHost + ?Sized,
    R: Renderer + ?Sized,
{
    match host.request_quota(requested).await {
        Ok(granted) => {
            let line = format!("Allocated {} bytes of persistent storage.", granted);
            info!("{}", line);
            renderer.log(&line);
            Ok(ModuleHandle::new(outbound))
        }
        Err(x) => {
            warn!("Quota request for {} bytes denied", x.requested);
            renderer.alert("Failed to allocate space");
            Err(SessionError::QuotaDenied(x))
        }
    }
}
