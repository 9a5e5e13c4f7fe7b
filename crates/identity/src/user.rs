use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hireboard_auth::Role;
use hireboard_core::{DomainError, DomainResult, UserId};

/// A past position on a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: Option<String>,
    pub description: Option<String>,
}

/// An education record on a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: Option<String>,
}

/// A registered user.
///
/// # Invariants
/// - `email` is lowercased and unique (uniqueness enforced by the store).
/// - `role` is immutable after registration; there is no promotion workflow.
/// - `password_hash` is an Argon2id PHC string, never the raw password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration input, with the password already hashed by the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validate a raw password before it is hashed.
///
/// Kept separate from [`User::register`] because the record only ever sees
/// the hash.
pub fn validate_password(password: &str) -> DomainResult<()> {
    if password.len() < 6 {
        return Err(DomainError::validation(
            "password must be at least 6 characters",
        ));
    }
    Ok(())
}

impl User {
    /// Build a user record from validated registration input.
    ///
    /// First failing check wins: name, then email.
    pub fn register(input: NewUser, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let email = input.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }

        Ok(Self {
            id: UserId::new(),
            name: name.to_string(),
            email,
            password_hash: input.password_hash,
            role: input.role,
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            resume: None,
            created_at: now,
        })
    }
}
