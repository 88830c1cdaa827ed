use crate::{
    error::DateError,
    json::{self, Templated},
    template::{self, Template},
};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date and time of day with whole seconds, represented in JSON as the string
/// `"yyyy-MM-ddThh:mm:ss"`.
///
/// Like [DateValue](crate::DateValue), this wraps an opaque [NaiveDateTime] interpreted in UTC and
/// exposes its fields as read-only projections.
///
/// ```
/// use jsondate::DateTimeValue;
///
/// let value = DateTimeValue::from_json("\"1742-12-25T13:32:20\"").unwrap();
/// assert_eq!((13, 32, 20), (value.hour(), value.minute(), value.second()));
///
/// // hour is scanned before the day is matched against february
/// let err = DateTimeValue::from_json("\"1742-02-30T24:32:20\"").unwrap_err();
/// assert_eq!(
///     "parsing time \"\"1742-02-30T24:32:20\"\": hour out of range",
///     err.to_string()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeValue(NaiveDateTime);

impl DateTimeValue {
    /// Returns the date-time for the given fields, or `None` if they do not denote a real date
    /// and time of day. Leap seconds (`second == 60`) are rejected.
    pub fn from_ymd_hms_opt(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(Self(date.and_time(time)))
    }

    /// Decodes a raw JSON string literal, surrounding quotes included.
    ///
    /// # Errors
    ///
    /// - [DateError::Shape] if `input` is not laid out as `"yyyy-MM-ddThh:mm:ss"`.
    /// - [DateError::Range] for the first field out of range. Fields are checked in the order
    ///   month, hour, minute, second; whether the day exists in its month is checked last.
    pub fn from_json(input: &str) -> Result<Self, DateError> {
        json::from_json(input)
    }

    /// Decodes `input` like [DateTimeValue::from_json] and, only if that succeeds, replaces this
    /// value with the result.
    pub fn assign_json(&mut self, input: &str) -> Result<(), DateError> {
        *self = Self::from_json(input)?;
        Ok(())
    }

    /// Returns the JSON string literal for this date-time, quotes included.
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

    /// Hour, `0`–`23`.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute, `0`–`59`.
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Second, `0`–`59`.
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the wrapped [NaiveDateTime].
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns this date-time as a UTC instant.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.and_utc()
    }
}

impl Default for DateTimeValue {
    /// 0001-01-01T00:00:00
    fn default() -> Self {
        Self(template::first_day().and_time(NaiveTime::default()))
    }
}

impl Templated for DateTimeValue {
    const TEMPLATE: &'static Template = &template::DATE_TIME;

    fn from_naive(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl From<NaiveDateTime> for DateTimeValue {
    /// Drops any fraction of a second, including a leap second.
    fn from(value: NaiveDateTime) -> Self {
        let time = value.time();
        let whole = NaiveTime::from_hms_opt(time.hour(), time.minute(), time.second())
            .unwrap_or(time);
        Self(value.date().and_time(whole))
    }
}

impl From<DateTime<Utc>> for DateTimeValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from(instant.naive_utc())
    }
}

impl From<DateTimeValue> for NaiveDateTime {
    fn from(value: DateTimeValue) -> Self {
        value.0
    }
}

impl FromStr for DateTimeValue {
    type Err = DateError;

    /// Parses unquoted `yyyy-MM-ddThh:mm:ss` text. Errors report the input as a quoted literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        json::from_content(s)
    }
}

impl Display for DateTimeValue {
    /// Displays the date-time as `yyyy-MM-ddThh:mm:ss`, without quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        template::write_year(f, self.year())?;
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl Serialize for DateTimeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTimeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        json::deserialize(deserializer)
    }
}
