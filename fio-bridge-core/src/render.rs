use crate::msg::Dimensions;

/// Sink for everything the bridge wants shown to the user
pub trait Renderer {
    /// Appends a line to the user-visible log
    fn log(&mut self, line: &str);

    /// Replaces the editor contents with a single string
    fn show_text(&mut self, text: &str);

    /// Replaces the rendered directory listing
    fn show_list(&mut self, entries: &[String]);

    fn show_dimensions(&mut self, dimensions: Dimensions);

    /// Blocking, user-facing notice with no recovery path
    fn alert(&mut self, text: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    Log(String),
    Text(String),
    List(Vec<String>),
    Dimensions(Dimensions),
    Alert(String),
}

/// Keeps every render call in order
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logs(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Log(x) => Some(x.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn log(&mut self, line: &str) {
        self.events.push(RenderEvent::Log(line.to_string()));
    }

    fn show_text(&mut self, text: &str) {
        self.events.push(RenderEvent::Text(text.to_string()));
    }

    fn show_list(&mut self, entries: &[String]) {
        self.events.push(RenderEvent::List(entries.to_vec()));
    }

    fn show_dimensions(&mut self, dimensions: Dimensions) {
        self.events.push(RenderEvent::Dimensions(dimensions));
    }

    fn alert(&mut self, text: &str) {
        self.events.push(RenderEvent::Alert(text.to_string()));
    }
}
