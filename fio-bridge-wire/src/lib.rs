mod format;
mod frame;
mod transmission;

pub mod constants {
    /// Largest frame payload accepted or produced unless configured otherwise
    pub const DEFAULT_MAX_FRAME: usize = 16 * 1024 * 1024;

    /// Separator placed between envelope fields by the piped format
    pub const FIELD_SEPARATOR: &str = "|";
}

pub use format::{DecodeError, EncodeError, WireFormat};
pub use frame::{FrameError, FrameReader, FrameWriter};
pub use transmission::Transmission;
