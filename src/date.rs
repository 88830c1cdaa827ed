use crate::{
    error::DateError,
    json::{self, Templated},
    template::{self, Template},
};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date, represented in JSON as the string `"yyyy-MM-dd"`.
///
/// The value is an opaque [NaiveDate], interpreted in UTC. The fields are read through
/// [year](DateValue::year), [month](DateValue::month) and [day](DateValue::day), so a `DateValue`
/// always denotes a real date.
///
/// Decoding is strict and happens in two phases. The literal must first match the template
/// exactly (length, quotes, hyphens and digits), and only then is it interpreted as a date:
///
/// ```
/// use jsondate::DateValue;
///
/// let date = DateValue::from_json("\"2008-12-25\"").unwrap();
/// assert_eq!((2008, 12, 25), (date.year(), date.month(), date.day()));
/// assert_eq!("\"2008-12-25\"", date.to_json());
///
/// let err = DateValue::from_json("\"2008_12_25\"").unwrap_err();
/// assert_eq!(
///     "invalid date: '\"2008_12_25\"' did not match yyyy-MM-dd format: missing hyphens",
///     err.to_string()
/// );
///
/// let err = DateValue::from_json("\"2008-02-30\"").unwrap_err();
/// assert_eq!("parsing time \"\"2008-02-30\"\": day out of range", err.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateValue(NaiveDate);

impl DateValue {
    /// Returns the date for the given fields, or `None` if they do not denote a real date.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Decodes a raw JSON string literal, surrounding quotes included.
    ///
    /// # Errors
    ///
    /// - [DateError::Shape] if `input` is not laid out as `"yyyy-MM-dd"`. Calendar ranges are not
    ///   looked at in that case.
    /// - [DateError::Range] if the month or the day is out of range.
    pub fn from_json(input: &str) -> Result<Self, DateError> {
        json::from_json(input)
    }

    /// Decodes `input` like [DateValue::from_json] and, only if that succeeds, replaces this
    /// value with the result.
    pub fn assign_json(&mut self, input: &str) -> Result<(), DateError> {
        *self = Self::from_json(input)?;
        Ok(())
    }

    /// Returns the JSON string literal for this date, quotes included.
    pub fn to_json(&self) -> String {
        json::to_json(self)
    }

    /// Year of the proleptic Gregorian calendar; `0` is 1 BCE.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, `1`–`12`.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month, `1`–`31`.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the wrapped [NaiveDate].
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns midnight UTC at the start of this date.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::default()).and_utc()
    }
}

impl Default for DateValue {
    /// 0001-01-01
    fn default() -> Self {
        Self(template::first_day())
    }
}

impl Templated for DateValue {
    const TEMPLATE: &'static Template = &template::DATE;

    fn from_naive(value: NaiveDateTime) -> Self {
        Self(value.date())
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }
}

impl From<DateValue> for NaiveDate {
    fn from(date: DateValue) -> Self {
        date.0
    }
}

impl FromStr for DateValue {
    type Err = DateError;

    /// Parses unquoted `yyyy-MM-dd` text. Errors report the input as a quoted literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        json::from_content(s)
    }
}

impl Display for DateValue {
    /// Displays the date as `yyyy-MM-dd`, without quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        template::write_year(f, self.year())?;
        write!(f, "-{:02}-{:02}", self.month(), self.day())
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        json::deserialize(deserializer)
    }
}
