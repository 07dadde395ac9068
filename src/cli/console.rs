use super::format::{self, FormatOption};
use fio_bridge_core::{Dimensions, Renderer};
use serde::Serialize;
use std::path::PathBuf;

/// Everything the bridge asked to show, in the order it was asked
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ConsoleEvent {
    Log(String),
    Text(String),
    List(Vec<String>),
    Dimensions { width: u32, height: u32 },
    Alert(String),
}

impl ConsoleEvent {
    fn to_human(&self) -> String {
        match self {
            Self::Log(x) => x.to_string(),
            Self::Text(x) => x.to_string(),
            Self::List(x) => x.join("\n"),
            Self::Dimensions { width, height } => {
                format!("Module area: {}x{}", width, height)
            }
            Self::Alert(x) => format!("ALERT: {}", x),
        }
    }
}

/// Renderer that queues output and writes it to stdout or a redirect file
/// whenever it is flushed
#[derive(Debug)]
pub struct ConsoleRenderer {
    format: FormatOption,
    redirect: Option<PathBuf>,
    pending: Vec<ConsoleEvent>,
}

impl ConsoleRenderer {
    pub fn new(format: FormatOption, redirect: Option<PathBuf>) -> Self {
        Self {
            format,
            redirect,
            pending: Vec::new(),
        }
    }

    /// Writes out every queued event, one per line
    pub async fn flush(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut text = String::new();
        for event in self.pending.drain(..) {
            let line = format::format(self.format, &event, |x| Ok(x.to_human()))?;
            text.push_str(&line);
            text.push('\n');
        }

        if !text.is_empty() {
            super::write_stdout(text, self.redirect.as_ref()).await?;
        }

        Ok(())
    }

    fn push(&mut self, event: ConsoleEvent) {
        self.pending.push(event);
    }
}

impl Renderer for ConsoleRenderer {
    fn log(&mut self, line: &str) {
        self.push(ConsoleEvent::Log(line.to_string()));
    }

    fn show_text(&mut self, text: &str) {
        self.push(ConsoleEvent::Text(text.to_string()));
    }

    fn show_list(&mut self, entries: &[String]) {
        self.push(ConsoleEvent::List(entries.to_vec()));
    }

    fn show_dimensions(&mut self, dimensions: Dimensions) {
        self.push(ConsoleEvent::Dimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }

    fn alert(&mut self, text: &str) {
        self.push(ConsoleEvent::Alert(text.to_string()));
    }
}
