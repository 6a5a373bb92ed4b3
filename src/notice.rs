// src/notice.rs
use crate::forms::FormData;
use crate::store::SignupRejection;

/// One-shot messages shown after a redirect, carried in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SignedUp,
    AlreadySignedUp,
    OpportunityFull,
    Full,
    Added,
    Updated,
    Deleted,
    Duplicated { original: String },
    LoggedIn,
    LoggedOut,
    LoginRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

impl Notice {
    pub fn code(&self) -> &'static str {
        match self {
            Notice::SignedUp => "signed-up",
            Notice::AlreadySignedUp => "already-signed-up",
            Notice::OpportunityFull => "opportunity-full",
            Notice::Full => "full",
            Notice::Added => "added",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::Duplicated { .. } => "duplicated",
            Notice::LoggedIn => "logged-in",
            Notice::LoggedOut => "logged-out",
            Notice::LoginRequired => "login-required",
        }
    }

    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::AlreadySignedUp
            | Notice::OpportunityFull
            | Notice::Full
            | Notice::LoginRequired => NoticeKind::Warning,
            _ => NoticeKind::Success,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::SignedUp => "Thank you for signing up! We'll see you on the water.".into(),
            Notice::AlreadySignedUp => {
                "You have already signed up for this opportunity with this email.".into()
            }
            Notice::OpportunityFull => "Sorry, this opportunity is already full.".into(),
            Notice::Full => "This opportunity is full. Thank you for your interest!".into(),
            Notice::Added => "Opportunity added.".into(),
            Notice::Updated => "Opportunity updated.".into(),
            Notice::Deleted => "Opportunity deleted.".into(),
            Notice::Duplicated { original } => format!(
                "Opportunity \"{original}\" duplicated as \"{original} (Copy)\". Update details as needed."
            ),
            Notice::LoggedIn => "Manager mode enabled.".into(),
            Notice::LoggedOut => "Logged out of manager mode.".into(),
            Notice::LoginRequired => "Please log in as a manager to continue.".into(),
        }
    }

    pub fn from_rejection(rejection: &SignupRejection) -> Option<Self> {
        match rejection {
            SignupRejection::DuplicateSignup => Some(Notice::AlreadySignedUp),
            SignupRejection::CapacityExceeded => Some(Notice::OpportunityFull),
            SignupRejection::NotFound => None,
        }
    }

    pub fn from_query(query: &FormData) -> Option<Self> {
        let notice = match query.opt("notice")? {
            "signed-up" => Notice::SignedUp,
            "already-signed-up" => Notice::AlreadySignedUp,
            "opportunity-full" => Notice::OpportunityFull,
            "full" => Notice::Full,
            "added" => Notice::Added,
            "updated" => Notice::Updated,
            "deleted" => Notice::Deleted,
            "duplicated" => Notice::Duplicated {
                original: query.get("title").to_string(),
            },
            "logged-in" => Notice::LoggedIn,
            "logged-out" => Notice::LoggedOut,
            "login-required" => Notice::LoginRequired,
            _ => return None,
        };
        Some(notice)
    }

    /// Query string carrying this notice, without the leading `?`.
    pub fn query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("notice", self.code());
        if let Notice::Duplicated { original } = self {
            query.append_pair("title", original);
        }
        query.finish()
    }

    /// Location of the board with this notice attached.
    pub fn redirect_target(&self) -> String {
        format!("/?{}", self.query())
    }
}
