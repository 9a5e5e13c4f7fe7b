//! `hireboard-identity` — user records and registration rules.

pub mod user;

pub use user::{EducationEntry, ExperienceEntry, NewUser, User, validate_password};
