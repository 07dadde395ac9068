use fio_bridge_wire::constants::FIELD_SEPARATOR;

/// Entry shown in place of a listing with no names
pub const EMPTY_DIRECTORY: &str = "<empty directory>";

/// Turns decoded reply fields into values a renderer can show directly
pub struct ResultProjector;

impl ResultProjector {
    pub fn text(text: String) -> String {
        text
    }

    /// Rejoins the fields of a file body the transport may have split
    ///
    /// This is lossy by construction: the result cannot tell a `|` that was
    /// in the original body from one introduced by the join.
    pub fn rejoin(fields: &[String]) -> String {
        fields.join(FIELD_SEPARATOR)
    }

    /// Keeps the module's order untouched; an empty listing becomes a single
    /// sentinel entry
    ///
    /// Names containing `|` will already have been split into several
    /// entries by the piped transport.
    pub fn listing(entries: Vec<String>) -> Vec<String> {
        if entries.is_empty() {
            vec![String::from(EMPTY_DIRECTORY)]
        } else {
            entries
        }
    }
}
