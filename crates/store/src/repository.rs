//! Repository trait definitions for data access abstraction.
//!
//! Methods are synchronous and dyn-safe; the in-memory implementation serves
//! requests under a `RwLock`. Lookups return `Ok(None)` for missing ids so
//! callers decide which not-found error fits their endpoint.

use hireboard_applications::Application;
use hireboard_companies::Company;
use hireboard_core::{ApplicationId, CompanyId, JobId, UserId};
use hireboard_identity::User;
use hireboard_jobs::Job;

use crate::error::StoreResult;

pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with `Duplicate` if the email is taken.
    fn insert(&self, user: User) -> StoreResult<()>;
    fn get(&self, id: UserId) -> StoreResult<Option<User>>;
    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}

pub trait CompanyStore: Send + Sync {
    /// Insert a new company. Fails with `Duplicate` on an exact name match.
    fn insert(&self, company: Company) -> StoreResult<()>;
    fn get(&self, id: CompanyId) -> StoreResult<Option<Company>>;
    /// Replace an existing record. Fails with `NotFound` if absent.
    fn update(&self, company: Company) -> StoreResult<()>;
    fn list(&self) -> StoreResult<Vec<Company>>;
}

pub trait JobStore: Send + Sync {
    fn insert(&self, job: Job) -> StoreResult<()>;
    fn get(&self, id: JobId) -> StoreResult<Option<Job>>;
    /// Replace an existing record. Fails with `NotFound` if absent.
    fn update(&self, job: Job) -> StoreResult<()>;
    /// Delete a job. Fails with `NotFound` if absent. Applications referencing
    /// the job are left in place.
    fn delete(&self, id: JobId) -> StoreResult<()>;
    fn list(&self) -> StoreResult<Vec<Job>>;
    /// Derived ownership lookup (replaces a stored job-id list on the poster).
    fn list_by_poster(&self, poster: UserId) -> StoreResult<Vec<Job>>;
    /// Derived back-reference (replaces a stored `Company.jobs` list).
    fn list_by_company(&self, company: CompanyId) -> StoreResult<Vec<Job>>;
}

pub trait ApplicationStore: Send + Sync {
    /// Insert a new application. Fails with `Duplicate` if one already exists
    /// for the same `(job, candidate)` pair.
    fn insert(&self, application: Application) -> StoreResult<()>;
    fn get(&self, id: ApplicationId) -> StoreResult<Option<Application>>;
    /// Replace an existing record. Fails with `NotFound` if absent.
    fn update(&self, application: Application) -> StoreResult<()>;
    fn list(&self) -> StoreResult<Vec<Application>>;
    fn list_by_candidate(&self, candidate: UserId) -> StoreResult<Vec<Application>>;
    /// Derived back-reference (replaces a stored `Job.applications` list).
    fn list_by_job(&self, job: JobId) -> StoreResult<Vec<Application>>;
    /// Applications to any of the given jobs (recruiter-scoped listing).
    fn list_for_jobs(&self, jobs: &[JobId]) -> StoreResult<Vec<Application>>;
    fn exists_for(&self, job: JobId, candidate: UserId) -> StoreResult<bool>;
}
