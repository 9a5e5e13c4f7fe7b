use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hireboard_core::{CompanyId, DomainError, DomainResult, JobId, UserId};

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Remote,
}

/// Posting lifecycle. Only `Open` jobs accept applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    Draft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub currency: Option<String>,
}

/// A job posting.
///
/// # Invariants
/// - `posted_by` and `company` are set at creation and never change.
/// - Mutation is allowed only to the poster or a global admin (see
///   [`crate::policy`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills_required: Vec<String>,
    pub location: String,
    pub job_type: JobType,
    pub salary: Option<Salary>,
    pub company: CompanyId,
    pub posted_by: UserId,
    pub status: JobStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills_required: Vec<String>,
    pub location: String,
    pub job_type: JobType,
    pub salary: Option<Salary>,
    pub company: CompanyId,
    pub status: Option<JobStatus>,
    pub deadline: Option<DateTime<Utc>>,
}

/// Partial update; `None` keeps the existing value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub skills_required: Option<Vec<String>>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary: Option<Salary>,
    pub status: Option<JobStatus>,
    pub deadline: Option<DateTime<Utc>>,
}

impl Job {
    /// Build a posting from validated input. `posted_by` is the acting user,
    /// never taken from the request body.
    pub fn post(input: NewJob, posted_by: UserId, now: DateTime<Utc>) -> DomainResult<Self> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if input.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if input.location.trim().is_empty() {
            return Err(DomainError::validation("location cannot be empty"));
        }

        Ok(Self {
            id: JobId::new(),
            title: title.to_string(),
            description: input.description,
            requirements: input.requirements,
            skills_required: input.skills_required,
            location: input.location,
            job_type: input.job_type,
            salary: input.salary,
            company: input.company,
            posted_by,
            status: input.status.unwrap_or_default(),
            deadline: input.deadline,
            created_at: now,
        })
    }

    /// Whether the posting accepts new applications at `now`.
    ///
    /// Open status and an unexpired deadline are independent gates; callers
    /// that need the specific failure use [`Job::status`] and
    /// [`Job::deadline_passed`] directly for precise error messages.
    pub fn is_accepting_applications(&self, now: DateTime<Utc>) -> bool {
        self.status == JobStatus::Open && !self.deadline_passed(now)
    }

    pub fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        matches!(self.deadline, Some(d) if d < now)
    }

    pub fn apply_update(&mut self, update: UpdateJob) -> DomainResult<()> {
        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(DomainError::validation("title cannot be empty"));
            }
            self.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            if description.trim().is_empty() {
                return Err(DomainError::validation("description cannot be empty"));
            }
            self.description = description;
        }
        if let Some(requirements) = update.requirements {
            self.requirements = requirements;
        }
        if let Some(skills_required) = update.skills_required {
            self.skills_required = skills_required;
        }
        if let Some(location) = update.location {
            if location.trim().is_empty() {
                return Err(DomainError::validation("location cannot be empty"));
            }
            self.location = location;
        }
        if let Some(job_type) = update.job_type {
            self.job_type = job_type;
        }
        if let Some(salary) = update.salary {
            self.salary = Some(salary);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(deadline) = update.deadline {
            self.deadline = Some(deadline);
        }
        Ok(())
    }
}
