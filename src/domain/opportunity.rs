// src/domain/opportunity.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an opportunity. Assigned once by the store, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityId(String);

impl OpportunityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    #[default]
    #[serde(rename = "All Day")]
    AllDay,
    #[serde(rename = "Full Day")]
    FullDay,
    Custom,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 6] = [
        TimeOfDay::AllDay,
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::FullDay,
        TimeOfDay::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::AllDay => "All Day",
            TimeOfDay::FullDay => "Full Day",
            TimeOfDay::Custom => "Custom",
        }
    }

    /// Parses the label used in forms and documents.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label.trim())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One volunteer's registration against an opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub signup_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: OpportunityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    #[serde(default)]
    pub time_range: String,
    pub volunteers_needed: u32,
    #[serde(default)]
    pub volunteers_signed_up: Vec<Signup>,
    pub created_at: DateTime<Utc>,
}

impl Opportunity {
    /// Last day the opportunity runs: the end date for ranges, otherwise the start date.
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.date)
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.last_day() >= today
    }

    /// Remaining capacity, zero once the roster reaches (or exceeds) the target.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.volunteers_signed_up.len()).unwrap_or(u32::MAX);
        self.volunteers_needed.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    pub fn has_signup_for(&self, email: &str) -> bool {
        self.volunteers_signed_up.iter().any(|v| v.email == email)
    }

    /// The editable fields, as the opportunity form sees them.
    pub fn to_draft(&self) -> OpportunityDraft {
        OpportunityDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date,
            end_date: self.end_date,
            time_of_day: self.time_of_day,
            time_range: self.time_range.clone(),
            volunteers_needed: self.volunteers_needed,
        }
    }

    /// Overwrites every editable field with the draft's values.
    /// Identity, roster and creation time are left alone.
    pub fn apply_draft(&mut self, draft: OpportunityDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.date = draft.date;
        self.end_date = draft.end_date;
        self.time_of_day = draft.time_of_day;
        self.time_range = draft.time_range;
        self.volunteers_needed = draft.volunteers_needed;
    }
}

/// A validated, normalized set of editable fields (output of the opportunity form).
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub time_of_day: TimeOfDay,
    pub time_range: String,
    pub volunteers_needed: u32,
}
