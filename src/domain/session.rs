// src/domain/session.rs

/// Who is looking at the board. Resolved per request from the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Manager,
}

impl Session {
    pub fn is_manager(&self) -> bool {
        matches!(self, Session::Manager)
    }

    pub fn view_mode(&self) -> ViewMode {
        match self {
            Session::Anonymous => ViewMode::Public,
            Session::Manager => ViewMode::Manager,
        }
    }
}

/// Which projection of the store to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Public,
    Manager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Nearest,
    DateAsc,
    DateDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [SortOption::Nearest, SortOption::DateAsc, SortOption::DateDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Nearest => "nearest",
            SortOption::DateAsc => "dateAsc",
            SortOption::DateDesc => "dateDesc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Nearest => "Nearest to Today (Upcoming)",
            SortOption::DateAsc => "Date (Oldest First)",
            SortOption::DateDesc => "Date (Newest First)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}
