//! # Identity seam
//!
//! Authentication itself is delegated to an external identity provider;
//! this crate only ever asks "who is looking at this?" so the access log
//! can attribute views. The trait keeps that collaborator swappable.

/// The current user's display identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub display_name: String,
}

pub trait UserSession {
    fn current_user(&self) -> Option<User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn logout(&mut self);
}

/// Process-local session: a display name from config or `--user`, nothing
/// more. Anonymous when none was given.
#[derive(Debug, Default)]
pub struct LocalSession {
    user: Option<User>,
}

impl LocalSession {
    pub fn new(display_name: Option<String>) -> Self {
        Self {
            user: display_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .map(|display_name| User { display_name }),
        }
    }

    /// The name the access log records; falls back for anonymous sessions.
    pub fn log_name(&self) -> String {
        self.current_user()
            .map(|u| u.display_name)
            .unwrap_or_else(|| "anonymous".to_string())
    }
}

impl UserSession for LocalSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn logout(&mut self) {
        self.user = None;
    }
}
