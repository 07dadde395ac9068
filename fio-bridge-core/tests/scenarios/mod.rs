pub mod dir;
pub mod fetch;
pub mod file;
pub mod ready;
pub mod upload;
