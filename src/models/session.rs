use crate::models::user::User;

/// Estado de resolución de la sesión.
///
/// `Failed` es distinto de "sin sesión": un fallo de transporte al resolver
/// la identidad NUNCA se presenta como logout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionStatus {
    Pending,
    Resolved,
    Failed,
}

/// Instantánea de sesión que reciben las pantallas.
///
/// Invariante: `status == Resolved` con `user == None` significa
/// "no autenticado"; `error` solo acompaña a `Failed`.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub status: SessionStatus,
    pub error: Option<String>,
}

impl SessionSnapshot {
    pub fn pending() -> Self {
        Self {
            user: None,
            status: SessionStatus::Pending,
            error: None,
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            status: SessionStatus::Resolved,
            error: None,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            status: SessionStatus::Resolved,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            user: None,
            status: SessionStatus::Failed,
            error: Some(message.into()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SessionStatus::Pending
    }

    pub fn is_failed(&self) -> bool {
        self.status == SessionStatus::Failed
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Resolved && self.user.is_some()
    }

    /// Las mutaciones solo son alcanzables con sesión resuelta y autenticada
    pub fn can_mutate(&self) -> bool {
        self.is_authenticated()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn pending_session_blocks_mutations() {
        let snapshot = SessionSnapshot::pending();
        assert!(snapshot.is_pending());
        assert!(!snapshot.can_mutate());
    }

    #[test]
    fn failed_is_not_unauthenticated() {
        let failed = SessionSnapshot::failed("backend unreachable");
        let logged_out = SessionSnapshot::unauthenticated();

        assert!(failed.is_failed());
        assert!(!failed.is_authenticated());
        assert!(!failed.can_mutate());
        assert_eq!(failed.error.as_deref(), Some("backend unreachable"));

        assert!(!logged_out.is_failed());
        assert_ne!(failed, logged_out);
    }

    #[test]
    fn resolved_with_user_can_mutate() {
        let snapshot = SessionSnapshot::authenticated(user());
        assert!(snapshot.is_authenticated());
        assert!(snapshot.can_mutate());
        assert_eq!(snapshot.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    }

    #[test]
    fn default_is_pending() {
        assert!(SessionSnapshot::default().is_pending());
    }
}
