//! Locales for date formatting
//!
//! A [`Locale`] is a plain value handed to every formatting call. Nothing in
//! the crate keeps a current locale around; two calls with different locales
//! never affect each other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported date locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese, the blog's locale
    #[default]
    #[serde(rename = "pt-br")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];
const PT_BR_MONTHS_SHORT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];
const PT_BR_WEEKDAYS: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];
const PT_BR_WEEKDAYS_SHORT: [&str; 7] = ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"];
const PT_BR_WEEKDAYS_MIN: [&str; 7] = ["do", "2ª", "3ª", "4ª", "5ª", "6ª", "sá"];

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const EN_WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const EN_WEEKDAYS_MIN: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

impl Locale {
    /// Canonical locale code
    pub fn code(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-br",
            Locale::En => "en",
        }
    }

    /// Full month name, `month` is 1-based
    pub fn month_name(self, month: u32) -> &'static str {
        let idx = month_index(month);
        match self {
            Locale::PtBr => PT_BR_MONTHS[idx],
            Locale::En => EN_MONTHS[idx],
        }
    }

    /// Abbreviated month name, `month` is 1-based
    pub fn month_abbr(self, month: u32) -> &'static str {
        let idx = month_index(month);
        match self {
            Locale::PtBr => PT_BR_MONTHS_SHORT[idx],
            Locale::En => EN_MONTHS_SHORT[idx],
        }
    }

    /// Full weekday name, counted from Sunday = 0
    pub fn weekday_name(self, from_sunday: u32) -> &'static str {
        let idx = (from_sunday % 7) as usize;
        match self {
            Locale::PtBr => PT_BR_WEEKDAYS[idx],
            Locale::En => EN_WEEKDAYS[idx],
        }
    }

    /// Abbreviated weekday name, counted from Sunday = 0
    pub fn weekday_abbr(self, from_sunday: u32) -> &'static str {
        let idx = (from_sunday % 7) as usize;
        match self {
            Locale::PtBr => PT_BR_WEEKDAYS_SHORT[idx],
            Locale::En => EN_WEEKDAYS_SHORT[idx],
        }
    }

    /// Shortest weekday name, counted from Sunday = 0
    pub fn weekday_min(self, from_sunday: u32) -> &'static str {
        let idx = (from_sunday % 7) as usize;
        match self {
            Locale::PtBr => PT_BR_WEEKDAYS_MIN[idx],
            Locale::En => EN_WEEKDAYS_MIN[idx],
        }
    }
}

// chrono months are always 1..=12
fn month_index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts `pt-br`, `pt_BR`, `pt`, `en`, `en-us` and friends, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pt_br_month_abbreviations() {
        let abbrs: Vec<_> = (1..=12).map(|m| Locale::PtBr.month_abbr(m)).collect();
        assert_eq!(
            abbrs,
            ["jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez"]
        );
    }

    #[test]
    fn test_en_names() {
        assert_eq!(Locale::En.month_name(3), "March");
        assert_eq!(Locale::En.weekday_abbr(0), "Sun");
        assert_eq!(Locale::PtBr.weekday_name(6), "sábado");
    }

    #[test]
    fn test_parse_locale_codes() {
        assert_eq!("pt-br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(Error::UnknownLocale(code)) if code == "fr"
        ));
    }

    #[test]
    fn test_default_is_pt_br() {
        assert_eq!(Locale::default(), Locale::PtBr);
        assert_eq!(Locale::default().to_string(), "pt-br");
    }
}
