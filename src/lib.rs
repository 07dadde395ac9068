mod cli;

pub use cli::{format, run, Opts};
