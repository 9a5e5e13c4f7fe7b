use serde::{Deserialize, Serialize};

/// Global role of a user.
///
/// Modeled as a closed enumeration rather than an opaque string so that a
/// mistyped role fails at the serialization boundary instead of silently
/// disabling authorization checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }

    /// Whether this role may post jobs and create companies.
    pub fn can_recruit(&self) -> bool {
        matches!(self, Role::Recruiter | Role::Admin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
