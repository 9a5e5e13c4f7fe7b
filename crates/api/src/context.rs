use hireboard_auth::{Actor, Role};
use hireboard_core::UserId;

/// Authenticated identity for a request, derived from verified token claims.
///
/// This is immutable and must be present for all protected routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ActorContext {
    user_id: UserId,
    role: Role,
}

impl ActorContext {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Snapshot handed to the policy predicates.
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}
