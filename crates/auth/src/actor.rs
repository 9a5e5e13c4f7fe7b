use serde::{Deserialize, Serialize};

use hireboard_core::UserId;

use crate::Role;

/// Snapshot of the authenticated user making a request.
///
/// Construction of this object is intentionally decoupled from storage and
/// transport: the API layer derives it from verified token claims. Policy
/// functions take an `Actor` plus resource snapshots and perform no IO.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
