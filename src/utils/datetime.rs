//! Date and time utility functions
//!
//! This module turns loosely delimited date strings (as rendered into venue and
//! show pages) into UTC timestamps and formats them back for display.
//!
//! The lenient parser follows browser `Date.UTC` coercion: the input is split on
//! runs of non-digits, every field is taken as-is and out-of-range values roll
//! over into the next larger unit. Nothing is validated; bad input produces an
//! invalid [`Timestamp`] rather than an error. [`parse_iso_string_strict`] is the
//! validating counterpart for callers that need well-defined behavior on short
//! or malformed input.

use std::convert::Infallible;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Largest distance from the epoch, in milliseconds, that a valid timestamp may have.
pub const MAX_TIMESTAMP_MILLIS: i64 = 8_640_000_000_000_000;

/// Long display format, e.g. `Tuesday May, 21, 2019 at 10:30AM`
pub const FULL_DATE_FORMAT: &str = "%A %B, %-d, %Y at %-I:%M%p";

/// Short display format, e.g. `Tue 05, 21, 2019 10:30AM`
pub const MEDIUM_DATE_FORMAT: &str = "%a %m, %d, %Y %-I:%M%p";

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

// Well past the valid range in both directions; keeps the calendar math in i64.
const MAX_YEAR_MAGNITUDE: u64 = 1_000_000_000;

const COMPONENTS: [&str; 7] = ["year", "month", "day", "hour", "minute", "second", "millisecond"];

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new("[^0-9]+").expect("separator pattern is valid"));

/// Errors reported by the strict parser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("missing {component} component")]
    MissingComponent { component: &'static str },

    #[error("{component} value {value} is out of range")]
    OutOfRange { component: &'static str, value: i64 },

    #[error("{component} value is too large")]
    Overflow { component: &'static str },
}

/// A UTC point in time with millisecond precision, or the invalid timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(Option<i64>);

impl Timestamp {
    /// The invalid timestamp ("Invalid Date")
    pub const INVALID: Timestamp = Timestamp(None);

    /// Build a timestamp from milliseconds since the Unix epoch.
    ///
    /// Values further than [`MAX_TIMESTAMP_MILLIS`] from the epoch give the invalid timestamp.
    pub fn from_millis(millis: i64) -> Self {
        if millis.unsigned_abs() <= MAX_TIMESTAMP_MILLIS as u64 {
            Timestamp(Some(millis))
        } else {
            Self::INVALID
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Milliseconds since the Unix epoch, if valid
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0
    }

    /// Convert to a chrono datetime.
    ///
    /// Returns `None` for invalid timestamps and for the few valid ones beyond
    /// chrono's supported year range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.0.and_then(DateTime::from_timestamp_millis)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::from_millis(dt.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(millis) = self.0 else {
            return f.write_str("Invalid Date");
        };

        let days = millis.div_euclid(MS_PER_DAY);
        let rem = millis.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        if (0..=9999).contains(&year) {
            write!(f, "{:04}", year)?;
        } else if year < 0 {
            write!(f, "-{:06}", -year)?;
        } else {
            write!(f, "+{:06}", year)?;
        }

        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            month,
            day,
            rem / MS_PER_HOUR,
            (rem % MS_PER_HOUR) / MS_PER_MINUTE,
            (rem % MS_PER_MINUTE) / MS_PER_SECOND,
            rem % MS_PER_SECOND
        )
    }
}

/// How strictly date strings are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Browser-style coercion, never fails
    #[default]
    Lenient,
    /// All seven components required and in range
    Strict,
}

/// Display format for timestamps
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFormat {
    Full,
    #[default]
    Medium,
    /// Any chrono strftime pattern
    Custom(String),
}

impl DateFormat {
    /// The strftime pattern behind this format
    pub fn pattern(&self) -> &str {
        match self {
            DateFormat::Full => FULL_DATE_FORMAT,
            DateFormat::Medium => MEDIUM_DATE_FORMAT,
            DateFormat::Custom(pattern) => pattern,
        }
    }

    /// Whether chrono accepts the pattern
    pub fn is_valid(&self) -> bool {
        !StrftimeItems::new(self.pattern()).any(|item| matches!(item, Item::Error))
    }
}

impl FromStr for DateFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "full" => DateFormat::Full,
            "medium" => DateFormat::Medium,
            other => DateFormat::Custom(other.to_string()),
        })
    }
}

/// Split a string on every run of characters other than ASCII digits.
///
/// Leading and trailing separators produce empty tokens, so `"T10:30Z"` gives
/// `["", "10", "30", ""]` and the empty string gives `[""]`.
pub fn split_numeric_runs(s: &str) -> Vec<&str> {
    SEPARATOR.split(s).collect()
}

/// Parse a delimited date string into a UTC timestamp.
///
/// Numeric runs are read in the order year, month (1-based), day, hour, minute,
/// second, millisecond. An empty run counts as zero, a missing one makes the
/// result invalid, and runs past the seventh are ignored. Years 0 through 99
/// map to 1900 through 1999. Fields are not range checked: `2019-13-01` is
/// January 2020 and `2019-05-21T24:00` is midnight on May 22.
///
/// # Examples
///
/// ```
/// use fyyur::utils::datetime::parse_iso_string;
///
/// let ts = parse_iso_string("2019-05-21T10:30:00.000");
/// assert_eq!(ts.to_string(), "2019-05-21T10:30:00.000Z");
///
/// assert!(!parse_iso_string("2019-05-21").is_valid());
/// ```
pub fn parse_iso_string(s: &str) -> Timestamp {
    let tokens = split_numeric_runs(s);

    let mut fields = [0i64; 7];
    for (index, field) in fields.iter_mut().enumerate() {
        match lenient_component(&tokens, index) {
            Some(value) => *field = value,
            None => return Timestamp::INVALID,
        }
    }

    let [year, month, day, hour, minute, second, millisecond] = fields;
    let year = if (0..=99).contains(&year) { 1900 + year } else { year };

    utc_millis(year, month - 1, day, hour, minute, second, millisecond)
        .map(Timestamp::from_millis)
        .unwrap_or(Timestamp::INVALID)
}

/// Parse a delimited date string, rejecting short input and out-of-range fields.
///
/// A single leading separator is allowed, as is trailing text after the seventh
/// component (such as a `Z` suffix). Two-digit years are taken literally.
pub fn parse_iso_string_strict(s: &str) -> Result<DateTime<Utc>, DateParseError> {
    let tokens = split_numeric_runs(s);
    let tokens = match tokens.split_first() {
        Some((first, rest)) if first.is_empty() => rest,
        _ => &tokens[..],
    };

    let mut fields = [0i64; 7];
    for (index, field) in fields.iter_mut().enumerate() {
        let component = COMPONENTS[index];
        let token = tokens
            .get(index)
            .filter(|token| !token.is_empty())
            .ok_or(DateParseError::MissingComponent { component })?;
        *field = token.parse().map_err(|_| DateParseError::Overflow { component })?;
    }

    let [year, month, day, hour, minute, second, millisecond] = fields;
    let out_of_range = |component: &'static str, value: i64| DateParseError::OutOfRange { component, value };

    let year_i32 = i32::try_from(year).map_err(|_| out_of_range("year", year))?;
    if NaiveDate::from_ymd_opt(year_i32, 1, 1).is_none() {
        return Err(out_of_range("year", year));
    }
    let month_u32 = in_range("month", month, 1, 12)?;
    let day_u32 = in_range("day", day, 1, 31)?;
    let date = NaiveDate::from_ymd_opt(year_i32, month_u32, day_u32).ok_or(out_of_range("day", day))?;

    let datetime = date
        .and_hms_milli_opt(
            in_range("hour", hour, 0, 23)?,
            in_range("minute", minute, 0, 59)?,
            in_range("second", second, 0, 59)?,
            in_range("millisecond", millisecond, 0, 999)?,
        )
        .ok_or(out_of_range("second", second))?;

    Ok(datetime.and_utc())
}

/// Parse with the given mode. Lenient parsing never returns an error.
pub fn parse_with_mode(s: &str, mode: ParseMode) -> Result<Timestamp, DateParseError> {
    match mode {
        ParseMode::Lenient => Ok(parse_iso_string(s)),
        ParseMode::Strict => parse_iso_string_strict(s).map(Timestamp::from),
    }
}

/// Format a datetime for display.
///
/// Falls back to RFC 3339 if a custom pattern cannot be rendered.
pub fn format_datetime(dt: &DateTime<Utc>, format: &DateFormat) -> String {
    let mut out = String::new();
    if write!(out, "{}", dt.format(format.pattern())).is_err() {
        return dt.to_rfc3339();
    }
    out
}

/// Leniently parse `value` and format it for display.
///
/// Returns the input unchanged if it does not parse to a valid timestamp.
pub fn format_datetime_str(value: &str, format: &DateFormat) -> String {
    match parse_iso_string(value).to_datetime() {
        Some(dt) => format_datetime(&dt, format),
        None => value.to_string(),
    }
}

fn lenient_component(tokens: &[&str], index: usize) -> Option<i64> {
    let token = tokens.get(index)?;
    if token.is_empty() {
        return Some(0);
    }
    // Too many digits for i64 is far outside the valid range anyway
    token.parse().ok()
}

fn in_range(component: &'static str, value: i64, min: i64, max: i64) -> Result<u32, DateParseError> {
    if (min..=max).contains(&value) {
        Ok(value as u32)
    } else {
        Err(DateParseError::OutOfRange { component, value })
    }
}

/// Milliseconds since the epoch for the given fields, rolling over out-of-range
/// values. `month` is 0-based. `None` when the arithmetic leaves i64.
fn utc_millis(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
) -> Option<i64> {
    let year = year.checked_add(month.div_euclid(12))?;
    if year.unsigned_abs() > MAX_YEAR_MAGNITUDE {
        return None;
    }
    let month = month.rem_euclid(12) as u32 + 1;

    let days = days_from_civil(year, month, 1).checked_add(day.checked_sub(1)?)?;
    let time = hour
        .checked_mul(MS_PER_HOUR)?
        .checked_add(minute.checked_mul(MS_PER_MINUTE)?)?
        .checked_add(second.checked_mul(MS_PER_SECOND)?)?
        .checked_add(millisecond)?;

    days.checked_mul(MS_PER_DAY)?.checked_add(time)
}

/// Days since 1970-01-01 for a proleptic Gregorian date
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year - era * 400;
    let month = i64::from(month);
    let doy = (153 * (month + if month > 2 { -3 } else { 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}
