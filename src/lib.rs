//! # jsondate
//!
//! Date and date-time value types with a strict, fixed-template JSON representation.
//!
//! - [`DateValue`] is written as `"yyyy-MM-dd"`, e.g. `"2008-12-25"`.
//! - [`DateTimeValue`] is written as `"yyyy-MM-ddThh:mm:ss"`, e.g. `"1742-12-25T13:32:20"`.
//!
//! Both are interpreted in UTC and carry no time zone or fraction of a second.
//!
//! ## Examples
//!
//! Use them as fields of any serde-derived struct:
//!
//! ```
//! use jsondate::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     ymd: DateValue,
//!     ymdhms: DateTimeValue,
//! }
//!
//! let json = r#"{"ymd":"2008-12-25","ymdhms":"1742-12-25T13:32:20"}"#;
//! let record: Record = serde_json::from_str(json).unwrap();
//! assert_eq!(2008, record.ymd.year());
//! assert_eq!(13, record.ymdhms.hour());
//! assert_eq!(json, serde_json::to_string(&record).unwrap());
//! ```
//!
//! Or work with the raw JSON string literals directly:
//!
//! ```
//! use jsondate::prelude::*;
//!
//! let date = DateValue::from_json("\"2008-12-25\"").unwrap();
//! assert_eq!("\"2008-12-25\"", date.to_json());
//! ```
//!
//! ## Errors
//!
//! Decoding happens in two phases, and the two kinds of failure have distinct messages:
//!
//! 1. The literal is checked against the template: its length, the surrounding quotes, the
//!    separators, and that every other position is a digit. A failure is a [`ShapeError`]:
//!
//!    `invalid date: '"2008_12_25"' did not match yyyy-MM-dd format: missing hyphens`
//!
//! 2. Only a well-shaped literal is interpreted as a calendar value. A field out of range is a
//!    [`RangeError`]:
//!
//!    `parsing time ""2008-02-30"": day out of range`
//!
//!    Fields are scanned left to right (month, hour, minute, second), and whether
//!    the day exists in its month is checked after the scan. So `"1742-02-30T24:32:20"` reports
//!    the hour, not the day.
//!
//! Both are variants of [`DateError`], whose message is that of the inner error.
//!
//! ## serde
//!
//! Deserialization reads the raw JSON literal of the value (via [`serde_json::value::RawValue`])
//! and decodes it exactly like [`DateValue::from_json`]: escapes are not resolved, so
//! `"2008\u002d12-25"` is rejected with `invalid length`. This requires `serde_json`'s own
//! deserializer (`from_str`, `from_slice`, `from_reader`); other data formats and
//! `serde_json::from_value` cannot hand over a raw literal.
//!
//! `serde_json` appends the position of the failing value to the decoder's message, e.g.
//!
//! `parsing time ""2008-02-30"": day out of range at line 1 column N`
//!
//! The error's [`classify`](serde_json::Error::classify) is `Category::Data`.
#![warn(missing_docs)]

mod date;
mod date_time;
mod error;
mod json;
mod template;

pub use crate::date::DateValue;
pub use crate::date_time::DateTimeValue;
pub use crate::error::{DateError, Field, RangeError, ShapeError, ShapeReason};

/// A convenience module appropriate for glob imports (`use jsondate::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::DateTimeValue;
    #[doc(no_inline)]
    pub use crate::DateValue;
}
