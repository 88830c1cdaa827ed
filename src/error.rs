use core::fmt::{self, Display};

/// Why a raw literal failed the shape check. The `Display` form is the explanation at the end of a
/// [`ShapeError`] message.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeReason {
    /// The literal is not exactly as long as the quoted template.
    #[error("invalid length")]
    InvalidLength,

    /// The literal does not start and end with a double quote.
    #[error("not a quoted string")]
    NotQuoted,

    /// A `-` separator position holds something else.
    #[error("missing hyphens")]
    MissingHyphens,

    /// The `T` between date and time holds something else.
    #[error("missing T")]
    MissingT,

    /// A `:` separator position holds something else.
    #[error("missing colons")]
    MissingColons,

    /// A digit position holds a non-digit.
    #[error("invalid digit")]
    InvalidDigit,
}

/// A raw literal did not match the template of the type it was decoded as. No calendar
/// interpretation was attempted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date: '{input}' did not match {template} format: {reason}")]
pub struct ShapeError {
    /// The literal exactly as received, quotes included.
    pub input: String,
    /// The template pattern, e.g. `yyyy-MM-dd`.
    pub template: &'static str,
    /// The first violation found.
    pub reason: ShapeReason,
}

/// A calendar field that can fall outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Month of the year.
    Month,
    /// Day of the month.
    Day,
    /// Hour of the day.
    Hour,
    /// Minute of the hour.
    Minute,
    /// Second of the minute.
    Second,
}

impl Field {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A well-shaped literal whose fields do not denote a real date or time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("parsing time \"{input}\": {field} out of range")]
pub struct RangeError {
    /// The literal exactly as received, quotes included.
    pub input: String,
    /// The first field found out of range.
    pub field: Field,
}

/// Errors returned when decoding a [`DateValue`](crate::DateValue) or
/// [`DateTimeValue`](crate::DateTimeValue).
///
/// Both variants are transparent: the message is that of the inner error, never wrapped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The literal failed the shape check.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The literal is well-shaped but out of calendar range.
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl DateError {
    /// Returns the shape violation, if this is a shape error.
    pub fn shape_reason(&self) -> Option<ShapeReason> {
        match self {
            DateError::Shape(e) => Some(e.reason),
            DateError::Range(_) => None,
        }
    }

    /// Returns the offending field, if this is a calendar-range error.
    pub fn range_field(&self) -> Option<Field> {
        match self {
            DateError::Shape(_) => None,
            DateError::Range(e) => Some(e.field),
        }
    }
}
