//! `hireboard-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{ApplicationId, CompanyId, EmployeeId, JobId, UserId};
