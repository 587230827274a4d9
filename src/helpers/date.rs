//! Date helper functions

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::i18n::Locale;

/// Pattern used for the post publication date
pub const POST_DATE_FORMAT: &str = "D MMM YYYY";

/// A parsed post date
///
/// Dates written with an offset (`2021-03-03T00:00:00Z`) keep it; dates
/// written without one are wall-clock times and are never shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostDate {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl PostDate {
    /// Wall-clock time in the date's own offset
    pub fn local(&self) -> NaiveDateTime {
        match self {
            PostDate::Zoned(dt) => dt.naive_local(),
            PostDate::Naive(ndt) => *ndt,
        }
    }

    /// Wall-clock time in `tz`; naive dates are taken to already be in it
    pub fn in_timezone(&self, tz: Tz) -> NaiveDateTime {
        match self {
            PostDate::Zoned(dt) => dt.with_timezone(&tz).naive_local(),
            PostDate::Naive(ndt) => *ndt,
        }
    }
}

impl FromStr for PostDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_date(s)
    }
}

/// Parse a serialized post date
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM` with an offset or `Z`,
/// `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]` and `YYYY-MM-DD`.
/// Anything else is an [`Error::InvalidDate`].
pub fn parse_date(input: &str) -> Result<PostDate> {
    let date_str = input.trim();

    // Try parsing as ISO 8601 with timezone
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(PostDate::Zoned(dt));
    }

    // Minute precision with an offset; %#z also takes a bare `Z`
    if let Ok(dt) = DateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M%#z") {
        return Ok(PostDate::Zoned(dt));
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(PostDate::Naive(ndt));
        }
    }

    if let Ok(nd) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Ok(PostDate::Naive(nd.and_time(NaiveTime::MIN)));
    }

    Err(Error::InvalidDate {
        input: input.to_string(),
    })
}

/// Format a date using a Moment.js-compatible pattern
///
/// Supported tokens: `YYYY YY MMMM MMM MM M DDDD DDD DD D dddd ddd dd d
/// HH H hh h mm m ss s A a`. Text inside `[...]` is copied verbatim, and so is
/// every other character.
///
/// # Examples
/// ```ignore
/// format_date(&date, "D MMM YYYY", Locale::PtBr) // -> "3 mar 2021"
/// ```
pub fn format_date(date: &NaiveDateTime, pattern: &str, locale: Locale) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '[' {
            for lit in chars.by_ref() {
                if lit == ']' {
                    break;
                }
                out.push(lit);
            }
            continue;
        }

        if !is_token_char(c) {
            out.push(c);
            continue;
        }

        let mut len = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            len += 1;
        }
        push_token(&mut out, date, c, len, locale);
    }

    out
}

fn is_token_char(c: char) -> bool {
    matches!(c, 'Y' | 'M' | 'D' | 'd' | 'H' | 'h' | 'm' | 's' | 'A' | 'a')
}

fn push_token(out: &mut String, date: &NaiveDateTime, token: char, len: usize, locale: Locale) {
    let text = match (token, len) {
        ('Y', 2) => format!("{:02}", date.year().rem_euclid(100)),
        ('Y', _) => format!("{:04}", date.year()),

        ('M', 1) => date.month().to_string(),
        ('M', 2) => format!("{:02}", date.month()),
        ('M', 3) => locale.month_abbr(date.month()).to_string(),
        ('M', _) => locale.month_name(date.month()).to_string(),

        ('D', 1) => date.day().to_string(),
        ('D', 2) => format!("{:02}", date.day()),
        ('D', 3) => date.ordinal().to_string(),
        ('D', _) => format!("{:03}", date.ordinal()),

        ('d', 1) => date.weekday().num_days_from_sunday().to_string(),
        ('d', 2) => locale
            .weekday_min(date.weekday().num_days_from_sunday())
            .to_string(),
        ('d', 3) => locale
            .weekday_abbr(date.weekday().num_days_from_sunday())
            .to_string(),
        ('d', _) => locale
            .weekday_name(date.weekday().num_days_from_sunday())
            .to_string(),

        ('H', 1) => date.hour().to_string(),
        ('H', _) => format!("{:02}", date.hour()),
        ('h', 1) => date.hour12().1.to_string(),
        ('h', _) => format!("{:02}", date.hour12().1),
        ('m', 1) => date.minute().to_string(),
        ('m', _) => format!("{:02}", date.minute()),
        ('s', 1) => date.second().to_string(),
        ('s', _) => format!("{:02}", date.second()),

        ('A', _) => (if date.hour12().0 { "PM" } else { "AM" }).to_string(),
        ('a', _) => (if date.hour12().0 { "pm" } else { "am" }).to_string(),

        _ => std::iter::repeat(token).take(len).collect(),
    };
    out.push_str(&text);
}

/// The "Published ..." text shown under a post title
pub fn published_label(input: &str, locale: Locale) -> Result<String> {
    let date = parse_date(input)?;
    Ok(published_text(&date.local(), POST_DATE_FORMAT, locale))
}

pub(crate) fn published_text(date: &NaiveDateTime, pattern: &str, locale: Locale) -> String {
    format!("Published {}", format_date(date, pattern, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_published_label() {
        assert_eq!(
            published_label("2021-03-03T00:00:00Z", Locale::PtBr).unwrap(),
            "Published 3 mar 2021"
        );
        assert_eq!(
            published_label("2020-08-15", Locale::PtBr).unwrap(),
            "Published 15 ago 2020"
        );
        assert_eq!(
            published_label("2021-03-03T00:00:00Z", Locale::En).unwrap(),
            "Published 3 Mar 2021"
        );
    }

    #[test]
    fn test_every_month_abbreviation() {
        let expected = [
            "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
        ];
        for (i, abbr) in expected.iter().enumerate() {
            let date = naive(2022, i as u32 + 1, 9, 12, 0, 0);
            assert_eq!(
                published_text(&date, POST_DATE_FORMAT, Locale::PtBr),
                format!("Published 9 {} 2022", abbr)
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let a = published_label("2021-12-31T23:59:59-03:00", Locale::PtBr).unwrap();
        let b = published_label("2021-12-31T23:59:59-03:00", Locale::PtBr).unwrap();
        assert_eq!(a, b);
        // the date's own offset is kept, so this is still the 31st
        assert_eq!(a, "Published 31 dez 2021");
    }

    #[test]
    fn test_invalid_date() {
        for input in ["", "not a date", "2021-13-01", "2021-02-30", "03/03/2021"] {
            match published_label(input, Locale::PtBr) {
                Err(Error::InvalidDate { input: got }) => assert_eq!(got, input),
                other => panic!("expected invalid date for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(
            parse_date(" 2021-03-03 10:20:30 ").unwrap(),
            PostDate::Naive(naive(2021, 3, 3, 10, 20, 30))
        );
        assert_eq!(
            parse_date("2021-03-03T10:20:30").unwrap(),
            PostDate::Naive(naive(2021, 3, 3, 10, 20, 30))
        );
        assert!(matches!(
            parse_date("2021-03-03T10:20:30+02:00").unwrap(),
            PostDate::Zoned(_)
        ));
    }

    #[test]
    fn test_parse_minute_precision() {
        assert_eq!(
            parse_date("2021-03-03T10:20").unwrap(),
            PostDate::Naive(naive(2021, 3, 3, 10, 20, 0))
        );
        assert_eq!(
            parse_date("2021-03-03 10:20").unwrap(),
            PostDate::Naive(naive(2021, 3, 3, 10, 20, 0))
        );

        let utc = parse_date("2021-03-03T10:20Z").unwrap();
        assert!(matches!(utc, PostDate::Zoned(dt) if dt.offset().local_minus_utc() == 0));
        assert_eq!(utc.local(), naive(2021, 3, 3, 10, 20, 0));

        let offset = parse_date("2021-03-03T10:20-03:00").unwrap();
        assert!(matches!(
            offset,
            PostDate::Zoned(dt) if dt.offset().local_minus_utc() == -3 * 3600
        ));
        assert_eq!(offset.local(), naive(2021, 3, 3, 10, 20, 0));

        for input in ["2021-03-03T10:20", "2021-03-03T10:20Z"] {
            assert_eq!(
                published_label(input, Locale::PtBr).unwrap(),
                "Published 3 mar 2021"
            );
        }
    }

    #[test]
    fn test_in_timezone() {
        let date = parse_date("2021-03-03T00:00:00Z").unwrap();
        let shifted = date.in_timezone(chrono_tz::America::Sao_Paulo);
        assert_eq!(format_date(&shifted, "D MMM YYYY", Locale::PtBr), "2 mar 2021");

        let naive_date = parse_date("2021-03-03").unwrap();
        assert_eq!(
            naive_date.in_timezone(chrono_tz::America::Sao_Paulo),
            naive(2021, 3, 3, 0, 0, 0)
        );
    }

    #[test]
    fn test_format_tokens() {
        let date = naive(2024, 1, 5, 14, 7, 9);
        assert_eq!(format_date(&date, "YYYY-MM-DD", Locale::En), "2024-01-05");
        assert_eq!(format_date(&date, "YY/M/D", Locale::En), "24/1/5");
        assert_eq!(format_date(&date, "HH:mm:ss", Locale::En), "14:07:09");
        assert_eq!(format_date(&date, "h:mm A", Locale::En), "2:07 PM");
        assert_eq!(
            format_date(&date, "dddd, D [de] MMMM [de] YYYY", Locale::PtBr),
            "sexta-feira, 5 de janeiro de 2024"
        );
        assert_eq!(format_date(&date, "ddd DDD", Locale::En), "Fri 5");
    }

    #[test]
    fn test_format_min_weekday() {
        let friday = naive(2024, 1, 5, 0, 0, 0);
        let sunday = naive(2024, 1, 7, 0, 0, 0);
        assert_eq!(format_date(&friday, "dd", Locale::PtBr), "6ª");
        assert_eq!(format_date(&sunday, "dd", Locale::PtBr), "do");
        assert_eq!(format_date(&friday, "dd", Locale::En), "Fr");
    }

    #[test]
    fn test_unterminated_literal_runs_to_end() {
        let date = naive(2021, 3, 3, 0, 0, 0);
        assert_eq!(format_date(&date, "D [de MMM", Locale::PtBr), "3 de MMM");
    }
}
