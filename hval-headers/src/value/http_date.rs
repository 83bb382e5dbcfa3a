use hval_parse::Cursor;
use hval_utils::macros::error::static_str_error;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::Grammar;

static_str_error! {
    /// The time cannot be written as an HTTP-date.
    pub struct InvalidHttpDate = "time out of range for an HTTP-date";
}

/// A timestamp with second precision, as used by
/// `Date`, `Last-Modified` and `Expires`.
///
/// ```text
/// HTTP-date    = IMF-fixdate / obs-date
/// IMF-fixdate  = day-name "," SP date1 SP time-of-day SP GMT
///              ; Sun, 06 Nov 1994 08:49:37 GMT
/// obs-date     = rfc850-date / asctime-date
///              ; Sunday, 06-Nov-94 08:49:37 GMT
///              ; Sun Nov  6 08:49:37 1994
/// ```
///
/// All three forms are accepted; output is always IMF-fixdate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpDate(httpdate::HttpDate);

// 9999-12-31T23:59:59Z
const MAX_SECS: u64 = 253_402_300_799;

impl HttpDate {
    /// The current time, if the system clock is within range.
    #[must_use]
    pub fn now() -> Option<Self> {
        Self::try_from(SystemTime::now()).ok()
    }

    /// Seconds since the unix epoch.
    #[must_use]
    pub fn as_unix_secs(&self) -> u64 {
        SystemTime::from(self.0)
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}

impl TryFrom<SystemTime> for HttpDate {
    type Error = InvalidHttpDate;

    fn try_from(time: SystemTime) -> Result<Self, Self::Error> {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) if since.as_secs() <= MAX_SECS => {
                // truncate to whole seconds
                let time = UNIX_EPOCH + Duration::from_secs(since.as_secs());
                Ok(Self(httpdate::HttpDate::from(time)))
            }
            _ => Err(InvalidHttpDate),
        }
    }
}

impl From<HttpDate> for SystemTime {
    fn from(date: HttpDate) -> Self {
        date.0.into()
    }
}

// an asctime-date is the only form without a trailing "GMT"
const ASCTIME_LEN: usize = 24;
// longest rfc850-date: "Wednesday, 09-Nov-99 23:12:40 GMT"
const MAX_LEN: usize = 33;

fn try_parse(s: &str) -> Option<httpdate::HttpDate> {
    httpdate::HttpDate::from_str(s).ok()
}

impl Grammar for HttpDate {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let remaining = cursor.remaining();
        let window = remaining.get(..MAX_LEN.min(remaining.len())).unwrap_or(remaining);

        let gmt_form = window
            .find("GMT")
            .map(|i| i + 3)
            .and_then(|end| Some((end, try_parse(remaining.get(..end)?)?)));
        let parsed = gmt_form.or_else(|| {
            let date = try_parse(remaining.get(..ASCTIME_LEN)?)?;
            Some((ASCTIME_LEN, date))
        });

        let (len, date) = parsed?;
        cursor.set_position(cursor.position() + len);
        Some(Self(date))
    }
}

impl fmt::Display for HttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl_str_codec!(HttpDate);

#[cfg(test)]
mod tests {
    use super::*;

    fn nov_07() -> HttpDate {
        HttpDate::try_from(UNIX_EPOCH + Duration::from_secs(784_198_117)).unwrap()
    }

    #[test]
    fn test_date_formats() {
        for input in [
            "Mon, 07 Nov 1994 08:48:37 GMT",
            "Monday, 07-Nov-94 08:48:37 GMT",
            "Mon Nov  7 08:48:37 1994",
        ] {
            assert_eq!(input.parse::<HttpDate>().unwrap(), nov_07(), "input: {input:?}");
        }
        assert_eq!(nov_07().to_string(), "Mon, 07 Nov 1994 08:48:37 GMT");
        assert_eq!(nov_07().as_unix_secs(), 784_198_117);
    }

    #[test]
    fn test_invalid_dates() {
        for input in [
            "",
            "Mon, 07 Nov 1994 08:48:37",
            "Mon, 07 Nov 1994 08:48:37 UTC",
            "Mon, 32 Nov 1994 08:48:37 GMT",
            "yesterday",
        ] {
            assert!(input.parse::<HttpDate>().is_err(), "input: {input:?}");
        }
    }

    #[test]
    fn test_parse_within_larger_input() {
        let mut cursor = Cursor::new("Mon Nov  7 08:48:37 1994\", next");
        assert_eq!(HttpDate::parse_from(&mut cursor), Some(nov_07()));
        assert_eq!(cursor.remaining(), "\", next");

        let mut cursor = Cursor::new("Mon, 07 Nov 1994 08:48:37 GMT, GMT");
        assert_eq!(HttpDate::parse_from(&mut cursor), Some(nov_07()));
        assert_eq!(cursor.remaining(), ", GMT");
    }

    #[test]
    fn test_system_time_range() {
        assert!(HttpDate::try_from(UNIX_EPOCH - Duration::from_secs(1)).is_err());
        assert!(HttpDate::try_from(UNIX_EPOCH + Duration::from_secs(MAX_SECS + 1)).is_err());
        let date = HttpDate::try_from(UNIX_EPOCH + Duration::from_millis(1_500)).unwrap();
        assert_eq!(SystemTime::from(date), UNIX_EPOCH + Duration::from_secs(1));
    }
}
