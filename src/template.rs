use crate::error::{DateError, Field, RangeError, ShapeError, ShapeReason};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use core::fmt;

/// A calendar component held at a fixed offset in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Component {
    fn width(&self) -> usize {
        match self {
            Component::Year => 4,
            _ => 2,
        }
    }

    /// Range check made while scanning. The day is not checked here: whether it exists in its
    /// month is decided once the whole literal has been scanned.
    fn scan_check(&self, value: u32) -> Result<(), Field> {
        match self {
            Component::Month if !(1..=12).contains(&value) => Err(Field::Month),
            Component::Hour if value > 23 => Err(Field::Hour),
            Component::Minute if value > 59 => Err(Field::Minute),
            Component::Second if value > 59 => Err(Field::Second),
            _ => Ok(()),
        }
    }
}

/// Describes a fixed-width textual template: which content offsets hold which separator, and
/// which hold the digits of which calendar component. Offsets are relative to the content, i.e.
/// they exclude the opening quote.
#[derive(Debug)]
pub(crate) struct Template {
    pub(crate) pattern: &'static str,
    separators: &'static [(usize, u8)],
    components: &'static [(usize, Component)],
}

/// `"yyyy-MM-dd"`
pub(crate) const DATE: Template = Template {
    pattern: "yyyy-MM-dd",
    separators: &[(4, b'-'), (7, b'-')],
    components: &[
        (0, Component::Year),
        (5, Component::Month),
        (8, Component::Day),
    ],
};

/// `"yyyy-MM-ddThh:mm:ss"`
pub(crate) const DATE_TIME: Template = Template {
    pattern: "yyyy-MM-ddThh:mm:ss",
    separators: &[(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':')],
    components: &[
        (0, Component::Year),
        (5, Component::Month),
        (8, Component::Day),
        (11, Component::Hour),
        (14, Component::Minute),
        (17, Component::Second),
    ],
};

fn missing(separator: u8) -> ShapeReason {
    match separator {
        b'T' => ShapeReason::MissingT,
        b':' => ShapeReason::MissingColons,
        _ => ShapeReason::MissingHyphens,
    }
}

/// Values read from a well-shaped literal. Components absent from a template keep the value of
/// midnight on January 1st.
struct Scanned {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Default for Scanned {
    fn default() -> Self {
        Self {
            year: 1,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl Template {
    /// Length of the literal, quotes included.
    pub(crate) const fn len(&self) -> usize {
        self.pattern.len() + 2
    }

    fn separator_at(&self, offset: usize) -> Option<u8> {
        self.separators
            .iter()
            .find(|(at, _)| *at == offset)
            .map(|(_, separator)| *separator)
    }

    /// Checks that `input` is a quoted literal laid out exactly like this template. Reports the
    /// first violation only; calendar ranges are not looked at.
    pub(crate) fn check_shape(&self, input: &str) -> Result<(), ShapeError> {
        let fail = |reason| ShapeError {
            input: input.to_string(),
            template: self.pattern,
            reason,
        };

        let bytes = input.as_bytes();
        if bytes.len() != self.len() {
            return Err(fail(ShapeReason::InvalidLength));
        }
        let last = bytes.len() - 1;
        if bytes[0] != b'"' || bytes[last] != b'"' {
            return Err(fail(ShapeReason::NotQuoted));
        }

        for (offset, &byte) in bytes[1..last].iter().enumerate() {
            match self.separator_at(offset) {
                Some(separator) if byte != separator => return Err(fail(missing(separator))),
                Some(_) => {}
                None if !byte.is_ascii_digit() => return Err(fail(ShapeReason::InvalidDigit)),
                None => {}
            }
        }
        Ok(())
    }

    /// Shape-checks `input`, then interprets it as a UTC calendar value.
    pub(crate) fn decode(&self, input: &str) -> Result<NaiveDateTime, DateError> {
        self.check_shape(input)?;
        let content = &input.as_bytes()[1..self.len() - 1];
        let value = self.scan(content).map_err(|field| RangeError {
            input: input.to_string(),
            field,
        })?;
        Ok(value)
    }

    /// Reads the components in template order, stopping at the first one out of range. `content`
    /// must already have passed [Template::check_shape].
    fn scan(&self, content: &[u8]) -> Result<NaiveDateTime, Field> {
        let mut scanned = Scanned::default();
        for &(offset, component) in self.components {
            let value = content[offset..offset + component.width()]
                .iter()
                .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));
            component.scan_check(value)?;
            match component {
                // at most 4 digits, always fits
                Component::Year => scanned.year = value as i32,
                Component::Month => scanned.month = value,
                Component::Day => scanned.day = value,
                Component::Hour => scanned.hour = value,
                Component::Minute => scanned.minute = value,
                Component::Second => scanned.second = value,
            }
        }

        let date = NaiveDate::from_ymd_opt(scanned.year, scanned.month, scanned.day)
            .ok_or(Field::Day)?;
        let time = NaiveTime::from_hms_opt(scanned.hour, scanned.minute, scanned.second)
            .ok_or(Field::Second)?;
        Ok(date.and_time(time))
    }
}

/// Writes a year padded to at least 4 digits. Negative years keep the padding after the sign.
pub(crate) fn write_year(f: &mut fmt::Formatter<'_>, year: i32) -> fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{:04}", year)
    }
}

/// 0001-01-01, the value of a date that was never set.
pub(crate) fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).expect("0001-01-01 is within chrono's range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use itertools::Itertools;
    use rstest::*;

    #[rstest]
    #[case(&DATE, 12)]
    #[case(&DATE_TIME, 21)]
    fn test_len(#[case] template: &Template, #[case] expected: usize) {
        assert_eq!(expected, template.len());
    }

    #[rstest]
    #[case(&DATE, "\"2008-12-25\"")]
    #[case(&DATE, "\"0000-00-00\"")] // shape only, ranges are not checked
    #[case(&DATE, "\"9999-99-99\"")]
    #[case(&DATE_TIME, "\"1742-12-25T13:32:20\"")]
    #[case(&DATE_TIME, "\"1742-02-30T99:99:99\"")]
    fn test_shape_ok(#[case] template: &Template, #[case] input: &str) {
        assert_eq!(Ok(()), template.check_shape(input));
    }

    #[rstest]
    #[case(&DATE, "\"\"", ShapeReason::InvalidLength)]
    #[case(&DATE, "", ShapeReason::InvalidLength)]
    #[case(&DATE, "\"2008-12-250\"", ShapeReason::InvalidLength)]
    #[case(&DATE, "2008-12-25", ShapeReason::InvalidLength)]
    #[case(&DATE, "'2008-12-25'", ShapeReason::NotQuoted)]
    #[case(&DATE, "\"2008-12-25 ", ShapeReason::NotQuoted)]
    #[case(&DATE, "200812250000", ShapeReason::NotQuoted)]
    #[case(&DATE, "\"2008_12_25\"", ShapeReason::MissingHyphens)]
    #[case(&DATE, "\"2008-12/25\"", ShapeReason::MissingHyphens)]
    #[case(&DATE, "\"a008-02-14\"", ShapeReason::InvalidDigit)]
    #[case(&DATE, "\"2008-02-1x\"", ShapeReason::InvalidDigit)]
    #[case(&DATE, "\"2008-+2-14\"", ShapeReason::InvalidDigit)]
    #[case(&DATE_TIME, "\"\"", ShapeReason::InvalidLength)]
    #[case(&DATE_TIME, "\"2008-12-25\"", ShapeReason::InvalidLength)]
    #[case(&DATE_TIME, "\"1742_12_25T13:32:20\"", ShapeReason::MissingHyphens)]
    #[case(&DATE_TIME, "\"1742-02-30X12:30:60\"", ShapeReason::MissingT)]
    #[case(&DATE_TIME, "\"1742-02-30 12:30:60\"", ShapeReason::MissingT)]
    #[case(&DATE_TIME, "\"1742-02-30T12X30:60\"", ShapeReason::MissingColons)]
    #[case(&DATE_TIME, "\"1742-02-30T12:30X60\"", ShapeReason::MissingColons)]
    #[case(&DATE_TIME, "\"a742-02-30T12:30:60\"", ShapeReason::InvalidDigit)]
    #[case(&DATE_TIME, "\"1742-02-30T12:30:6a\"", ShapeReason::InvalidDigit)]
    fn test_shape_err(
        #[case] template: &Template,
        #[case] input: &str,
        #[case] reason: ShapeReason,
    ) {
        let expected = ShapeError {
            input: input.to_string(),
            template: template.pattern,
            reason,
        };
        assert_eq!(Err(expected), template.check_shape(input));
    }

    /// the first violation from the left wins
    #[rstest]
    #[case(&DATE, "\"a008_12_25\"", ShapeReason::InvalidDigit)]
    #[case(&DATE, "\"2008_1a_25\"", ShapeReason::MissingHyphens)]
    #[case(&DATE_TIME, "\"1742-02-30X12X30X60\"", ShapeReason::MissingT)]
    #[case(&DATE_TIME, "\"1742-02-30T1a:30X60\"", ShapeReason::InvalidDigit)]
    #[case(&DATE_TIME, "'1742_02_30X12X30X60\"", ShapeReason::NotQuoted)]
    fn test_shape_first_violation(
        #[case] template: &Template,
        #[case] input: &str,
        #[case] reason: ShapeReason,
    ) {
        assert_eq!(
            Some(reason),
            template.check_shape(input).err().map(|e| e.reason)
        );
    }

    /// replacing any single content position with a wrong character is reported with the reason
    /// belonging to that position.
    #[rstest]
    #[case(&DATE, "\"2008-12-25\"")]
    #[case(&DATE_TIME, "\"1742-12-25T13:32:20\"")]
    fn test_shape_every_position(#[case] template: &Template, #[case] valid: &str) {
        let substitutes = ['x', ' ', '/', '.'];
        for (offset, substitute) in (0..template.pattern.len()).cartesian_product(substitutes) {
            let mut input = valid.to_string();
            input.replace_range(offset + 1..offset + 2, &substitute.to_string());

            let expected = match template.separator_at(offset) {
                Some(separator) => missing(separator),
                None => ShapeReason::InvalidDigit,
            };
            assert_eq!(
                Some(expected),
                template.check_shape(&input).err().map(|e| e.reason),
                "{input}"
            );
        }
    }

    #[test]
    fn test_shape_non_ascii_digit() {
        // arabic-indic digit two: two bytes, so swap out two ascii digits to keep the length
        let input = "\"\u{0662}08-12-25\"";
        assert_eq!(12, input.len());
        assert_eq!(
            Some(ShapeReason::InvalidDigit),
            DATE.check_shape(input).err().map(|e| e.reason)
        );
    }

    #[rstest]
    #[case(&DATE, "\"2008-13-25\"", Field::Month)]
    #[case(&DATE, "\"2008-00-25\"", Field::Month)]
    #[case(&DATE, "\"2008-02-30\"", Field::Day)]
    #[case(&DATE, "\"2007-02-29\"", Field::Day)]
    #[case(&DATE, "\"2008-12-00\"", Field::Day)]
    #[case(&DATE, "\"2008-12-32\"", Field::Day)]
    #[case(&DATE, "\"2008-13-32\"", Field::Month)]
    #[case(&DATE_TIME, "\"1742-13-25T13:32:20\"", Field::Month)]
    #[case(&DATE_TIME, "\"1742-02-30T13:32:20\"", Field::Day)]
    #[case(&DATE_TIME, "\"1742-02-30T24:32:20\"", Field::Hour)]
    #[case(&DATE_TIME, "\"1742-02-30T12:60:20\"", Field::Minute)]
    #[case(&DATE_TIME, "\"1742-02-30T12:30:60\"", Field::Second)]
    #[case(&DATE_TIME, "\"1742-02-32T24:32:20\"", Field::Hour)]
    #[case(&DATE_TIME, "\"1742-02-00T24:32:20\"", Field::Hour)]
    #[case(&DATE_TIME, "\"1742-02-99T12:30:59\"", Field::Day)]
    #[case(&DATE_TIME, "\"1742-02-00T12:30:59\"", Field::Day)]
    #[case(&DATE_TIME, "\"1742-00-32T24:60:60\"", Field::Month)]
    fn test_decode_range_err(
        #[case] template: &Template,
        #[case] input: &str,
        #[case] field: Field,
    ) {
        let expected = DateError::Range(RangeError {
            input: input.to_string(),
            field,
        });
        assert_eq!(Err(expected), template.decode(input));
    }

    #[test]
    fn test_decode_shape_before_range() {
        // month 13 would be out of range, but the hyphen is checked first
        let actual = DATE.decode("\"2008-13_25\"");
        assert_eq!(
            Some(ShapeReason::MissingHyphens),
            actual.err().and_then(|e| e.shape_reason())
        );
    }

    #[test]
    fn test_decode_date() {
        let value = DATE.decode("\"2008-02-29\"").unwrap();
        assert_eq!((2008, 2, 29), (value.year(), value.month(), value.day()));
        assert_eq!(NaiveTime::default(), value.time());
    }

    #[test]
    fn test_decode_date_time() {
        let value = DATE_TIME.decode("\"0000-12-31T23:59:59\"").unwrap();
        assert_eq!((0, 12, 31), (value.year(), value.month(), value.day()));
        assert_eq!(
            (23, 59, 59),
            (value.hour(), value.minute(), value.second())
        );
    }
}
