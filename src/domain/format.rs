// src/domain/format.rs

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Long display form of a calendar date, e.g. "June 15, 2025". "N/A" when absent.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Date span shown on cards: a single date, or "start - end" when the end differs.
pub fn format_date_span(start: NaiveDate, end: Option<NaiveDate>) -> String {
    match end {
        Some(end) if end != start => {
            format!("{} - {}", format_date(Some(start)), format_date(Some(end)))
        }
        _ => format_date(Some(start)),
    }
}

/// `YYYY-MM-DD` key for a date, the format used by date inputs and documents.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Source of "now" and "today". Tests pin it to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }

    /// Today's calendar date in the server's local time zone.
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(at) => at.date_naive(),
        }
    }
}
