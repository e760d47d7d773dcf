//! French display names for dates.
//!
//! Fixed lookup tables, indexed by `num_days_from_sunday` and `month0`.

use chrono::{Datelike, NaiveDate};

/// Column headers of the week view.
const WEEKDAY_SHORT: [&str; 7] = [
    "Dim.", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Sam.",
];

const WEEKDAY_LONG: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];

const MONTH_SHORT: [&str; 12] = [
    "Janv.", "Fév.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];

const MONTH_LONG: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// Weekday name as shown above a day column (e.g., "Lundi").
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_SHORT[date.weekday().num_days_from_sunday() as usize]
}

/// Abbreviated month name (e.g., "Oct.").
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_SHORT[date.month0() as usize]
}

/// "lundi 19 octobre"
pub fn format_day_month(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        WEEKDAY_LONG[date.weekday().num_days_from_sunday() as usize],
        date.day(),
        MONTH_LONG[date.month0() as usize]
    )
}

/// "lundi 19 octobre 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {}", format_day_month(date), date.year())
}
