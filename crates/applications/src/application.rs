use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hireboard_core::{ApplicationId, DomainError, DomainResult, JobId, UserId};
use hireboard_jobs::{Job, JobStatus};

/// Application pipeline stage.
///
/// `Submitted` is the initial state; the expected path runs
/// Submitted → Reviewed → Shortlisted → Interviewed → Offered → Hired, with
/// Rejected reachable from any non-terminal stage. Writes are deliberately
/// unconstrained: an authorized reviewer may set any stage in a single call
/// (there is no transition table), matching the business rules as they stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    Reviewed,
    Shortlisted,
    Interviewed,
    Offered,
    Rejected,
    Hired,
}

/// A reviewer note attached to an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// A candidate's application to a job.
///
/// # Invariants
/// - At most one application per `(job, candidate)` pair (enforced by the
///   store at insert time, and pre-checked at submission).
/// - `job` and `candidate` never change after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job: JobId,
    pub candidate: UserId,
    pub resume_link: Option<String>,
    pub status: ApplicationStatus,
    pub notes: Vec<Note>,
    pub applied_at: DateTime<Utc>,
}

impl Application {
    /// Submit an application against a snapshot of the target job.
    ///
    /// Checks run in order and the first failure short-circuits:
    /// job open, deadline not passed, not already applied. The caller has
    /// already established that the actor is a candidate and that the job
    /// exists.
    pub fn submit(
        candidate: UserId,
        job: &Job,
        already_applied: bool,
        resume_link: Option<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if job.status != JobStatus::Open {
            return Err(DomainError::validation(
                "this job is not currently accepting applications",
            ));
        }
        if job.deadline_passed(now) {
            return Err(DomainError::validation(
                "the application deadline for this job has passed",
            ));
        }
        if already_applied {
            return Err(DomainError::validation(
                "you have already applied for this job",
            ));
        }

        Ok(Self {
            id: ApplicationId::new(),
            job: job.id,
            candidate,
            resume_link,
            status: ApplicationStatus::Submitted,
            notes: Vec::new(),
            applied_at: now,
        })
    }

    /// Set the pipeline stage. Any enumerated value is accepted; see the
    /// [`ApplicationStatus`] docs for why no transition table exists.
    pub fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    /// Append a reviewer note.
    pub fn add_note(
        &mut self,
        text: String,
        created_by: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::validation("note text cannot be empty"));
        }
        self.notes.push(Note {
            text: text.to_string(),
            created_by,
            created_at: now,
        });
        Ok(())
    }
}
