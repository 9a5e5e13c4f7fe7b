//! `hireboard-store` — storage seam for the domain.
//!
//! Trait-per-entity repositories with an in-memory implementation. Uniqueness
//! invariants (user email, company name, one application per job+candidate)
//! are enforced here, under the write lock, so concurrent check-then-insert
//! sequences cannot produce duplicates.

pub mod error;
pub mod memory;
pub mod pagination;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use pagination::{Page, PageRef, Paginated, paginate};
pub use repository::{ApplicationStore, CompanyStore, JobStore, UserStore};
