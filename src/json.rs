use crate::{error::DateError, template::Template};
use chrono::NaiveDateTime;
use core::fmt;
use serde::{de, Deserialize, Deserializer};
use serde_json::value::RawValue;

/// A value type bound to a [Template]. Implementors render the template content (without quotes)
/// through `Display`.
pub(crate) trait Templated: Sized + fmt::Display {
    const TEMPLATE: &'static Template;

    /// Builds the value from a decoded timestamp. Components the template does not carry are at
    /// their zero value.
    fn from_naive(value: NaiveDateTime) -> Self;
}

/// Decodes a raw JSON string literal, quotes included.
pub(crate) fn from_json<T: Templated>(input: &str) -> Result<T, DateError> {
    T::TEMPLATE.decode(input).map(T::from_naive)
}

/// Decodes unquoted template content. Errors report the content re-quoted.
pub(crate) fn from_content<T: Templated>(content: &str) -> Result<T, DateError> {
    from_json(&format!("\"{content}\""))
}

pub(crate) fn to_json<T: Templated>(value: &T) -> String {
    format!("\"{value}\"")
}

/// Deserializes the raw JSON literal of a value and decodes it with [from_json], so the shape
/// check sees the value exactly as it was written in the document, escapes and all.
pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Templated,
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    from_json(raw.get()).map_err(de::Error::custom)
}
