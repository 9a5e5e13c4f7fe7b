//! Authorization predicates for application operations.
//!
//! Pure decision functions over snapshots. The caller resolves the
//! application (and, for recruiters, its parent job) first; a missing
//! application id is NotFound before any of these run.

use hireboard_auth::{Actor, Role};
use hireboard_core::{DomainError, DomainResult};
use hireboard_jobs::Job;

use crate::Application;

/// Application creation: candidates only. Job-state gates live in
/// [`crate::Application::submit`].
pub fn authorize_apply(actor: &Actor) -> DomainResult<()> {
    if actor.role == Role::Candidate {
        Ok(())
    } else {
        Err(DomainError::forbidden("only candidates can apply for jobs"))
    }
}

/// Status updates and notes: a global admin, or a recruiter who posted the
/// parent job. `parent_job` is `None` when the job record no longer exists;
/// a recruiter cannot prove ownership then and is denied.
pub fn authorize_review(actor: &Actor, parent_job: Option<&Job>) -> DomainResult<()> {
    if actor.is_admin() {
        return Ok(());
    }
    if actor.role == Role::Recruiter {
        if let Some(job) = parent_job {
            if job.posted_by == actor.id {
                return Ok(());
            }
        }
    }
    Err(DomainError::forbidden(format!(
        "user {} is not authorized to update this application",
        actor.id
    )))
}

/// Reads: the owning candidate, the recruiter who posted the parent job, or
/// a global admin.
pub fn authorize_view(
    actor: &Actor,
    application: &Application,
    parent_job: Option<&Job>,
) -> DomainResult<()> {
    if actor.is_admin() {
        return Ok(());
    }
    if actor.role == Role::Candidate && application.candidate == actor.id {
        return Ok(());
    }
    if actor.role == Role::Recruiter {
        if let Some(job) = parent_job {
            if job.posted_by == actor.id {
                return Ok(());
            }
        }
    }
    Err(DomainError::forbidden(
        "not authorized to view this application",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Application;
    use chrono::Utc;
    use hireboard_core::{CompanyId, UserId};
    use hireboard_jobs::{JobType, NewJob};

    fn job(posted_by: UserId) -> Job {
        Job::post(
            NewJob {
                title: "Backend Engineer".to_string(),
                description: "Build services".to_string(),
                requirements: vec![],
                skills_required: vec![],
                location: "Berlin".to_string(),
                job_type: JobType::FullTime,
                salary: None,
                company: CompanyId::new(),
                status: None,
                deadline: None,
            },
            posted_by,
            Utc::now(),
        )
        .unwrap()
    }

    fn application(job: &Job, candidate: UserId) -> Application {
        Application::submit(candidate, job, false, None, Utc::now()).unwrap()
    }

    #[test]
    fn only_candidates_may_apply() {
        assert!(authorize_apply(&Actor::new(UserId::new(), Role::Candidate)).is_ok());
        assert!(authorize_apply(&Actor::new(UserId::new(), Role::Recruiter)).is_err());
        assert!(authorize_apply(&Actor::new(UserId::new(), Role::Admin)).is_err());
    }

    #[test]
    fn owning_recruiter_may_review() {
        let recruiter = UserId::new();
        let j = job(recruiter);
        assert!(authorize_review(&Actor::new(recruiter, Role::Recruiter), Some(&j)).is_ok());
    }

    #[test]
    fn foreign_recruiter_is_denied_review() {
        let j = job(UserId::new());
        let stranger = Actor::new(UserId::new(), Role::Recruiter);
        assert!(matches!(
            authorize_review(&stranger, Some(&j)),
            Err(DomainError::Forbidden(_))
        ));
    }

    #[test]
    fn recruiter_denied_review_when_parent_job_is_gone() {
        let recruiter = Actor::new(UserId::new(), Role::Recruiter);
        assert!(authorize_review(&recruiter, None).is_err());
        // A global admin is not blocked by the missing job.
        assert!(authorize_review(&Actor::new(UserId::new(), Role::Admin), None).is_ok());
    }

    #[test]
    fn candidate_may_view_own_application_only() {
        let candidate = UserId::new();
        let j = job(UserId::new());
        let app = application(&j, candidate);

        assert!(authorize_view(&Actor::new(candidate, Role::Candidate), &app, Some(&j)).is_ok());

        let other = Actor::new(UserId::new(), Role::Candidate);
        assert!(authorize_view(&other, &app, Some(&j)).is_err());
    }

    #[test]
    fn owning_recruiter_and_admin_may_view() {
        let recruiter = UserId::new();
        let j = job(recruiter);
        let app = application(&j, UserId::new());

        assert!(authorize_view(&Actor::new(recruiter, Role::Recruiter), &app, Some(&j)).is_ok());
        assert!(authorize_view(&Actor::new(UserId::new(), Role::Admin), &app, Some(&j)).is_ok());
        assert!(
            authorize_view(&Actor::new(UserId::new(), Role::Recruiter), &app, Some(&j)).is_err()
        );
    }
}
