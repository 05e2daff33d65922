use std::sync::OnceLock;

use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use log::warn;
use regex::Regex;

use crate::context::Timezone;

/// Every header date is pinned to this hour so that entries of the same day compare equal.
const ANCHOR_HOUR: u32 = 15;

/// Date used when a header line carries a date that does not exist.
const FALLBACK_DATE: (i32, u32, u32) = (1997, 1, 1);

/// A date/author line such as `2016-12-05  A. Funahashi  <funa@bio.keio.ac.jp>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Header {
    /// Domain part of the author's address.
    pub namespace: String,
    pub timestamp: i64,
}

fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})\s+.+<.*@(.+)>$").unwrap()
    })
}

impl Header {
    /// Returns the header carried by `section`, or `None` for a body section.
    pub fn classify(section: &[String], timezone: Timezone) -> Option<Self> {
        let [line] = section else {
            return None;
        };
        let caps = header_pattern().captures(line)?;

        let date = parse_date(&caps[1], &caps[2], &caps[3]).unwrap_or_else(|| {
            warn!("Invalid date in header {line:?}. falling back to {FALLBACK_DATE:?}");
            fallback_date()
        });

        Some(Self {
            namespace: caps[4].to_string(),
            timestamp: anchored_timestamp(date, timezone),
        })
    }
}

fn parse_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn fallback_date() -> NaiveDate {
    let (year, month, day) = FALLBACK_DATE;
    NaiveDate::from_ymd_opt(year, month, day).expect("fallback date is a calendar date")
}

pub(crate) fn anchored_timestamp(date: NaiveDate, timezone: Timezone) -> i64 {
    let datetime: NaiveDateTime = date
        .and_hms_opt(ANCHOR_HOUR, 0, 0)
        .expect("anchor hour is a valid time of day");
    match timezone {
        // a skipped local time (DST gap) has no mapping; use UTC then
        Timezone::Local => Local
            .from_local_datetime(&datetime)
            .earliest()
            .map_or_else(|| datetime.and_utc().timestamp(), |dt| dt.timestamp()),
        Timezone::Utc => datetime.and_utc().timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Option<Header> {
        Header::classify(&[line.to_string()], Timezone::Utc)
    }

    #[test]
    fn extracts_namespace_and_timestamp() {
        let header = classify("2016-12-05  A. Funahashi  <funa@bio.keio.ac.jp>").unwrap();
        assert_eq!(header.namespace, "bio.keio.ac.jp");
        assert_eq!(header.timestamp, 1_480_950_000);
    }

    #[test]
    fn single_digit_month_and_day() {
        let header = classify("2016-2-5 someone <me@example.org>").unwrap();
        assert_eq!(header.timestamp, 1_454_684_400);
    }

    #[test]
    fn same_date_same_timestamp() {
        let a = classify("2016-12-05  Alice  <alice@example.org>").unwrap();
        let b = classify("2016-12-05  Bob  <bob@example.com>").unwrap();
        assert_eq!(a.timestamp, b.timestamp);
        assert_ne!(a.namespace, b.namespace);
    }

    #[test]
    fn namespace_follows_last_at_sign() {
        let header = classify("2020-01-01  Team  <dev@relay@lists.example.net>").unwrap();
        assert_eq!(header.namespace, "lists.example.net");
    }

    #[test]
    fn impossible_date_falls_back() {
        let header = classify("2016-13-40  Someone  <me@example.org>").unwrap();
        assert_eq!(header.timestamp, 852_130_800);
        assert_eq!(header.namespace, "example.org");
    }

    #[test]
    fn rejects_non_headers() {
        assert!(classify("\t* file.c: title").is_none());
        assert!(classify("2016-12-05 no address here").is_none());
        assert!(classify("16-12-05  Someone  <me@example.org>").is_none());
        assert!(classify("2016-12-05  Someone  <me@example.org> trailing").is_none());
        assert!(classify("2016-12-05<me@example.org>").is_none());
        assert!(classify("２０１６-12-05  Someone  <me@example.org>").is_none());
    }

    #[test]
    fn multi_line_section_is_body() {
        let section = vec![
            "2016-12-05  Someone  <me@example.org>".to_string(),
            "\t* file.c: title".to_string(),
        ];
        assert!(Header::classify(&section, Timezone::Utc).is_none());
    }

    #[test]
    fn local_timezone_matches_chrono_local() {
        let date = NaiveDate::from_ymd_opt(2016, 12, 5).unwrap();
        let expected = Local
            .with_ymd_and_hms(2016, 12, 5, 15, 0, 0)
            .earliest()
            .unwrap()
            .timestamp();
        assert_eq!(anchored_timestamp(date, Timezone::Local), expected);
    }
}
