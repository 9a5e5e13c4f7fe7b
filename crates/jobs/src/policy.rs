//! Authorization predicates for job mutations.
//!
//! Pure decision functions over snapshots. A missing job id is NotFound
//! before any of these run.

use hireboard_auth::Actor;
use hireboard_core::{DomainError, DomainResult};

use crate::Job;

/// Job creation: recruiters and global admins only.
pub fn authorize_post(actor: &Actor) -> DomainResult<()> {
    if actor.role.can_recruit() {
        Ok(())
    } else {
        Err(DomainError::forbidden(
            "only recruiters and admins can post jobs",
        ))
    }
}

/// Job update/delete: the poster, or a global admin.
pub fn authorize_mutate(actor: &Actor, job: &Job) -> DomainResult<()> {
    if actor.is_admin() || job.posted_by == actor.id {
        Ok(())
    } else {
        Err(DomainError::forbidden(format!(
            "user {} is not authorized to modify this job",
            actor.id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{Job, JobType, NewJob};
    use chrono::Utc;
    use hireboard_auth::Role;
    use hireboard_core::{CompanyId, UserId};

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

    #[test]
    fn candidates_cannot_post() {
        assert!(matches!(
            authorize_post(&Actor::new(UserId::new(), Role::Candidate)),
            Err(DomainError::Forbidden(_))
        ));
        assert!(authorize_post(&Actor::new(UserId::new(), Role::Recruiter)).is_ok());
    }

    #[test]
    fn poster_may_mutate() {
        let poster = UserId::new();
        let j = job(poster);
        assert!(authorize_mutate(&Actor::new(poster, Role::Recruiter), &j).is_ok());
    }

    #[test]
    fn admin_may_mutate_any_job() {
        let j = job(UserId::new());
        assert!(authorize_mutate(&Actor::new(UserId::new(), Role::Admin), &j).is_ok());
    }

    #[test]
    fn other_recruiters_are_denied() {
        let j = job(UserId::new());
        let stranger = Actor::new(UserId::new(), Role::Recruiter);
        assert!(matches!(
            authorize_mutate(&stranger, &j),
            Err(DomainError::Forbidden(_))
        ));
    }

    #[test]
    fn candidate_owner_check_is_by_id_not_role() {
        // Ownership is keyed on posted_by alone; role gates creation, not
        // subsequent mutation.
        let poster = UserId::new();
        let j = job(poster);
        assert!(authorize_mutate(&Actor::new(poster, Role::Candidate), &j).is_ok());
    }
}
