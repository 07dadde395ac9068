use serde::Serialize;
use strum_macros::{AsRefStr, EnumString, EnumVariantNames};

pub type FormatResult = Result<String, Box<dyn std::error::Error>>;

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumString, EnumVariantNames, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum FormatOption {
    /// Human-readable format for output
    Human,

    /// JSON format for output
    Json,
}

/// Creates a `String` using the given `format_option` and `serializable_data`,
/// falling back to the `fallback` function to render human-readable text.
pub fn format<T, F>(
    format_option: FormatOption,
    serializable_data: T,
    fallback: F,
) -> FormatResult
where
    T: Serialize,
    F: FnOnce(T) -> FormatResult,
{
    let text = match format_option {
        FormatOption::Json => serde_json::to_string(&serializable_data)?,
        FormatOption::Human => fallback(serializable_data)?,
    };

    Ok(text)
}
