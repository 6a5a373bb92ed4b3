// src/board.rs
use std::sync::{Mutex, MutexGuard};

use tracing::{error, info};

use crate::db::OpportunityRepository;
use crate::domain::{
    Clock, Opportunity, OpportunityDraft, OpportunityId, Signup, SortOption, ViewMode,
};
use crate::errors::ServerError;
use crate::loader::LoadError;
use crate::store::{OpportunityStore, SignupRejection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// What a list page needs to render.
#[derive(Debug)]
pub struct BoardView {
    pub load: LoadState,
    pub sort: SortOption,
    pub items: Vec<Opportunity>,
}

struct BoardInner {
    load: LoadState,
    store: OpportunityStore,
}

/// The store plus its persistence collaborator. Every mutation takes the one
/// lock, so actions are applied strictly one after another.
pub struct Board {
    inner: Mutex<BoardInner>,
    repo: Box<dyn OpportunityRepository>,
    clock: Clock,
}

impl Board {
    /// A board waiting for its initial load.
    pub fn new(repo: Box<dyn OpportunityRepository>, clock: Clock) -> Self {
        Self {
            inner: Mutex::new(BoardInner {
                load: LoadState::Loading,
                store: OpportunityStore::default(),
            }),
            repo,
            clock,
        }
    }

    /// A board that is already loaded with `items`.
    pub fn ready(repo: Box<dyn OpportunityRepository>, clock: Clock, items: Vec<Opportunity>) -> Self {
        let board = Self::new(repo, clock);
        board.finish_load(Ok(items));
        board
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn repository(&self) -> &dyn OpportunityRepository {
        self.repo.as_ref()
    }

    fn lock(&self) -> MutexGuard<'_, BoardInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn load_state(&self) -> LoadState {
        self.lock().load.clone()
    }

    /// Installs the result of the initial load. Anything created while the
    /// load was in flight is kept.
    pub fn finish_load(&self, result: Result<Vec<Opportunity>, LoadError>) {
        let mut inner = self.lock();
        let sort = inner.store.sort();
        match result {
            Ok(mut items) => {
                info!(count = items.len(), "opportunities loaded");
                let pending = std::mem::take(&mut inner.store);
                let mut pending = pending.into_items();
                items.retain(|op| !pending.iter().any(|p| p.id == op.id));
                items.append(&mut pending);
                inner.store = OpportunityStore::new(items, sort);
                inner.load = LoadState::Ready;
            }
            Err(e) => {
                error!(error = %e, "initial load failed");
                inner.load = LoadState::Failed("Failed to load opportunities.".to_string());
            }
        }
    }

    /// Projection for a list page. A given `sort` becomes the active sort option.
    pub fn view(&self, mode: ViewMode, sort: Option<SortOption>) -> BoardView {
        let mut inner = self.lock();
        if let Some(sort) = sort {
            if sort != inner.store.sort() {
                inner.store.set_sort(sort);
            }
        }
        let sort = inner.store.sort();
        let items = match inner.load {
            LoadState::Ready => inner.store.project(mode, sort, self.clock.today()),
            LoadState::Loading | LoadState::Failed(_) => Vec::new(),
        };
        BoardView {
            load: inner.load.clone(),
            sort,
            items,
        }
    }

    pub fn get(&self, id: &OpportunityId) -> Option<Opportunity> {
        self.lock().store.get(id).cloned()
    }

    // Each mutation keeps the lock until its write has reached the repository,
    // so writes land in the same order as the store changes.
    pub fn add(&self, draft: OpportunityDraft) -> Opportunity {
        let mut inner = self.lock();
        let op = inner.store.add(draft, self.clock.now());
        info!(id = %op.id, title = %op.title, "opportunity added");
        self.persist("add", self.repo.add(&op));
        op
    }

    pub fn update(&self, id: &OpportunityId, draft: OpportunityDraft) -> Option<Opportunity> {
        let mut inner = self.lock();
        let op = inner.store.update(id, draft).cloned()?;
        info!(id = %op.id, "opportunity updated");
        self.persist("update", self.repo.update(&op));
        Some(op)
    }

    pub fn delete(&self, id: &OpportunityId) -> Option<Opportunity> {
        let mut inner = self.lock();
        let op = inner.store.delete(id)?;
        info!(id = %op.id, title = %op.title, "opportunity deleted");
        self.persist("delete", self.repo.delete(id));
        Some(op)
    }

    pub fn duplicate(&self, id: &OpportunityId) -> Option<Opportunity> {
        let mut inner = self.lock();
        let copy = inner
            .store
            .duplicate(id, self.clock.now(), self.clock.today())?;
        info!(from = %id, id = %copy.id, "opportunity duplicated");
        self.persist("add", self.repo.add(&copy));
        Some(copy)
    }

    pub fn signup(&self, id: &OpportunityId, signup: Signup) -> Result<Opportunity, SignupRejection> {
        let mut inner = self.lock();
        let result = inner.store.signup(id, signup.clone()).cloned();
        match &result {
            Ok(op) => {
                info!(id = %op.id, roster = op.volunteers_signed_up.len(), "volunteer signed up");
                self.persist("append_signup", self.repo.append_signup(id, &signup));
            }
            Err(rejection) => info!(%id, %rejection, "signup rejected"),
        }
        result
    }

    // The in-memory store stays authoritative when a write fails.
    fn persist(&self, op: &str, result: Result<(), ServerError>) {
        if let Err(e) = result {
            error!(operation = op, error = %e, "persistence write failed");
        }
    }
}
