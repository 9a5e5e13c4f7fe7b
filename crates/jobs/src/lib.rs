//! `hireboard-jobs` — job postings and their ownership rules.

pub mod job;
pub mod policy;

pub use job::{Job, JobStatus, JobType, NewJob, Salary, UpdateJob};
pub use policy::{authorize_mutate, authorize_post};
