// src/store.rs

use crate::auth::token::generate_id;
use crate::domain::{
    Opportunity, OpportunityDraft, OpportunityId, Signup, SortOption, ViewMode,
};
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupRejection {
    #[error("You have already signed up for this opportunity with this email.")]
    DuplicateSignup,
    #[error("Sorry, this opportunity is already full.")]
    CapacityExceeded,
    #[error("Opportunity not found")]
    NotFound,
}

/// In-memory collection of opportunities.
///
/// The backing list is kept in the order of the last sort applied, so equal
/// dates keep their relative order across re-sorts.
#[derive(Debug, Default)]
pub struct OpportunityStore {
    items: Vec<Opportunity>,
    sort: SortOption,
}

impl OpportunityStore {
    pub fn new(items: Vec<Opportunity>, sort: SortOption) -> Self {
        let mut store = Self { items, sort };
        store.resort();
        store
    }

    pub fn into_items(self) -> Vec<Opportunity> {
        self.items
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn get(&self, id: &OpportunityId) -> Option<&Opportunity> {
        self.items.iter().find(|op| &op.id == id)
    }

    /// Records the active sort option and re-sorts the backing list.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.resort();
    }

    pub fn add(&mut self, draft: OpportunityDraft, now: DateTime<Utc>) -> Opportunity {
        let id = self.fresh_id();
        let op = Opportunity {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            end_date: draft.end_date,
            time_of_day: draft.time_of_day,
            time_range: draft.time_range,
            volunteers_needed: draft.volunteers_needed,
            volunteers_signed_up: Vec::new(),
            created_at: now,
        };
        self.items.push(op.clone());
        self.resort();
        op
    }

    /// Merges `draft` over the matching opportunity. Returns the updated
    /// opportunity, or `None` (and changes nothing) when `id` is unknown.
    pub fn update(&mut self, id: &OpportunityId, draft: OpportunityDraft) -> Option<&Opportunity> {
        let op = self.items.iter_mut().find(|op| &op.id == id)?;
        op.apply_draft(draft);
        Some(&*op)
    }

    pub fn delete(&mut self, id: &OpportunityId) -> Option<Opportunity> {
        let idx = self.items.iter().position(|op| &op.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Copies the opportunity as a fresh, single-day one dated `today`
    /// with an empty roster and a " (Copy)" title suffix.
    pub fn duplicate(
        &mut self,
        id: &OpportunityId,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Option<Opportunity> {
        let original = self.get(id)?;
        let draft = OpportunityDraft {
            title: format!("{} (Copy)", original.title),
            date: today,
            end_date: None,
            ..original.to_draft()
        };
        Some(self.add(draft, now))
    }

    /// Appends `signup` to the roster unless the email is already on it or
    /// the roster has reached capacity. A rejection leaves the roster untouched.
    pub fn signup(&mut self, id: &OpportunityId, signup: Signup) -> Result<&Opportunity, SignupRejection> {
        let op = self
            .items
            .iter_mut()
            .find(|op| &op.id == id)
            .ok_or(SignupRejection::NotFound)?;

        if op.has_signup_for(&signup.email) {
            return Err(SignupRejection::DuplicateSignup);
        }
        if op.volunteers_signed_up.len() >= op.volunteers_needed as usize {
            return Err(SignupRejection::CapacityExceeded);
        }

        op.volunteers_signed_up.push(signup);
        Ok(&*op)
    }

    /// Derives the visible list for a view mode and sort option.
    pub fn project(&self, mode: ViewMode, sort: SortOption, today: NaiveDate) -> Vec<Opportunity> {
        let mut visible: Vec<Opportunity> = match mode {
            ViewMode::Public => self
                .items
                .iter()
                .filter(|op| op.is_upcoming(today))
                .cloned()
                .collect(),
            ViewMode::Manager => self.items.clone(),
        };

        sort_by_option(&mut visible, sort);

        if sort == SortOption::Nearest && mode != ViewMode::Manager {
            visible.retain(|op| op.is_upcoming(today));
        }

        visible
    }

    fn resort(&mut self) {
        sort_by_option(&mut self.items, self.sort);
    }

    fn fresh_id(&self) -> OpportunityId {
        loop {
            let id = OpportunityId::new(generate_id());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn sort_by_option(items: &mut [Opportunity], sort: SortOption) {
    // slice::sort_by is stable
    match sort {
        SortOption::Nearest | SortOption::DateAsc => items.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOption::DateDesc => items.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}
