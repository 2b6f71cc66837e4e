// File: crates/month-graph-core/src/axis.rs
// Summary: Monthly time axis: month arithmetic and label formatting.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// How month labels are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    /// `Oct 2026`
    #[default]
    Long,
    /// `Oct`
    Short,
}

impl LabelFormat {
    fn pattern(self) -> &'static str {
        match self {
            LabelFormat::Long => "%b %Y",
            LabelFormat::Short => "%b",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthLabel {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub text: String,
}

/// Year and month `offset` months after the month containing `start`.
///
/// Only the year and month of `start` are used, so a start on the 31st
/// never skips a shorter month.
pub fn add_months(start: NaiveDate, offset: u32) -> (i32, u32) {
    let total = start.year() as i64 * 12 + start.month0() as i64 + offset as i64;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;
    (year, month)
}

pub fn month_label(start: NaiveDate, offset: u32, format: LabelFormat) -> MonthLabel {
    let (year, month) = add_months(start, offset);
    let text = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format(format.pattern()).to_string())
        // past chrono's representable range
        .unwrap_or_else(|| format!("{year}-{month:02}"));
    MonthLabel { year, month, text }
}

/// Whole months from the month containing `from` to the month containing `to`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let index = |d: NaiveDate| d.year() as i64 * 12 + d.month0() as i64;
    index(to) - index(from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn consecutive_months_roll_over_year() {
        let start = date(2026, 11, 15);
        let texts: Vec<_> = (0..3).map(|i| month_label(start, i, LabelFormat::Long).text).collect();
        assert_eq!(texts, ["Nov 2026", "Dec 2026", "Jan 2027"]);
        let third = month_label(start, 2, LabelFormat::Long);
        assert_eq!((third.year, third.month), (2027, 1));
    }

    #[test]
    fn end_of_month_start_does_not_skip() {
        assert_eq!(month_label(date(2026, 1, 31), 1, LabelFormat::Short).text, "Feb");
    }

    #[test]
    fn large_offsets_stay_consistent() {
        assert_eq!(add_months(date(2020, 5, 1), 24), (2022, 5));
        assert_eq!(add_months(date(2020, 5, 1), 0), (2020, 5));
    }

    #[test]
    fn months_between_ignores_day() {
        assert_eq!(months_between(date(2026, 10, 31), date(2026, 10, 1)), 0);
        assert_eq!(months_between(date(2026, 12, 1), date(2027, 2, 28)), 2);
        assert_eq!(months_between(date(2027, 2, 28), date(2026, 12, 1)), -2);
    }
}
