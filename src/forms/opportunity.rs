// src/forms/opportunity.rs
use crate::domain::format::date_key;
use crate::domain::{Opportunity, OpportunityDraft, TimeOfDay};
use crate::forms::{FormData, ValidationError};
use chrono::NaiveDate;

/// Choices offered by the time-of-day select. "Full Day" only appears when an
/// existing opportunity already carries it.
pub const OPPORTUNITY_TIME_CHOICES: [TimeOfDay; 5] = [
    TimeOfDay::AllDay,
    TimeOfDay::Morning,
    TimeOfDay::Afternoon,
    TimeOfDay::Evening,
    TimeOfDay::Custom,
];

/// Raw create/edit fields, kept as text so a rejected submission can be
/// re-rendered exactly as it was typed.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub is_date_range: bool,
    pub end_date: String,
    pub time_of_day: String,
    pub time_range: String,
    pub volunteers_needed: String,
}

impl OpportunityForm {
    /// Blank create form: today's date, "All Day", one volunteer.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: date_key(today),
            is_date_range: false,
            end_date: String::new(),
            time_of_day: TimeOfDay::AllDay.label().to_string(),
            time_range: String::new(),
            volunteers_needed: "1".to_string(),
        }
    }

    pub fn from_opportunity(op: &Opportunity) -> Self {
        Self {
            title: op.title.clone(),
            description: op.description.clone(),
            date: date_key(op.date),
            is_date_range: op.end_date.is_some(),
            end_date: op.end_date.map(date_key).unwrap_or_default(),
            time_of_day: op.time_of_day.label().to_string(),
            time_range: op.time_range.clone(),
            volunteers_needed: op.volunteers_needed.to_string(),
        }
    }

    pub fn from_form(form: &FormData) -> Self {
        Self {
            title: form.get("title").to_string(),
            description: form.get("description").to_string(),
            date: form.get("date").trim().to_string(),
            is_date_range: form.checked("isDateRange"),
            end_date: form.get("endDate").trim().to_string(),
            time_of_day: form.get("timeOfDay").to_string(),
            time_range: form.get("timeRange").to_string(),
            volunteers_needed: form.get("volunteersNeeded").trim().to_string(),
        }
    }

    /// Applies the rules in order; the first failure wins.
    /// A stale end date is dropped when the range toggle is off.
    pub fn validate(&self) -> Result<OpportunityDraft, ValidationError> {
        if self.title.is_empty() || self.date.is_empty() || self.volunteers_needed.is_empty() {
            return Err(ValidationError::new(
                "Please fill in Title, Date, and Volunteers Needed.",
            ));
        }

        let volunteers_needed = match self.volunteers_needed.parse::<i64>() {
            Ok(n) if n > 0 => u32::try_from(n).map_err(|_| {
                ValidationError::new("Number of volunteers needed is too large.")
            })?,
            _ => {
                return Err(ValidationError::new(
                    "Number of volunteers needed must be greater than zero.",
                ))
            }
        };

        if self.is_date_range && self.end_date.is_empty() {
            return Err(ValidationError::new(
                "Please provide an end date for the date range.",
            ));
        }

        let date = parse_date(&self.date)?;
        let end_date = if self.is_date_range {
            let end = parse_date(&self.end_date)?;
            if end < date {
                return Err(ValidationError::new(
                    "End date cannot be before the start date.",
                ));
            }
            Some(end)
        } else {
            None
        };

        let time_of_day = TimeOfDay::from_label(&self.time_of_day).unwrap_or_default();

        Ok(OpportunityDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date,
            end_date,
            time_of_day,
            time_range: self.time_range.clone(),
            volunteers_needed,
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::new("Please enter dates as YYYY-MM-DD."))
}
