//! Authorization predicates for company mutations.
//!
//! Pure decision functions over snapshots; no IO, no mutation. Callers must
//! resolve the company first — a missing id is NotFound before any ownership
//! check runs.

use hireboard_auth::Actor;
use hireboard_core::{DomainError, DomainResult};

use crate::Company;

/// Company creation: recruiters and global admins only.
pub fn authorize_create(actor: &Actor) -> DomainResult<()> {
    if actor.role.can_recruit() {
        Ok(())
    } else {
        Err(DomainError::forbidden(
            "only recruiters and admins can create companies",
        ))
    }
}

/// Company update and employee add/remove: a company-scoped admin, or a
/// global admin (who bypasses the employee list entirely).
pub fn authorize_manage(actor: &Actor, company: &Company) -> DomainResult<()> {
    if actor.is_admin() || company.is_company_admin(actor.id) {
        Ok(())
    } else {
        Err(DomainError::forbidden(format!(
            "user {} is not authorized to manage this company",
            actor.id
        )))
    }
}
