use std::collections::HashMap;
use std::sync::RwLock;

use hireboard_applications::Application;
use hireboard_companies::Company;
use hireboard_core::{ApplicationId, CompanyId, JobId, UserId};
use hireboard_identity::User;
use hireboard_jobs::Job;

use crate::error::{StoreError, StoreResult};
use crate::repository::{ApplicationStore, CompanyStore, JobStore, UserStore};

/// In-memory document store.
///
/// One `RwLock`ed map per entity. Uniqueness checks run under the write lock,
/// so two racing inserts for the same email/name/(job, candidate) pair cannot
/// both succeed. Intended for tests/dev and as the reference implementation
/// of the repository traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    companies: RwLock<HashMap<CompanyId, Company>>,
    jobs: RwLock<HashMap<JobId, Job>>,
    applications: RwLock<HashMap<ApplicationId, Application>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> StoreResult<std::sync::RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| StoreError::Poisoned)
}

fn write<T>(lock: &RwLock<T>) -> StoreResult<std::sync::RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| StoreError::Poisoned)
}

impl UserStore for MemoryStore {
    fn insert(&self, user: User) -> StoreResult<()> {
        let mut users = write(&self.users)?;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::duplicate("user", user.email));
        }
        users.insert(user.id, user);
        Ok(())
    }

    fn get(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(read(&self.users)?.get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(read(&self.users)?
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

impl CompanyStore for MemoryStore {
    fn insert(&self, company: Company) -> StoreResult<()> {
        let mut companies = write(&self.companies)?;
        // Exact, case-sensitive match.
        if companies.values().any(|c| c.name == company.name) {
            return Err(StoreError::duplicate("company", company.name));
        }
        companies.insert(company.id, company);
        Ok(())
    }

    fn get(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        Ok(read(&self.companies)?.get(&id).cloned())
    }

    fn update(&self, company: Company) -> StoreResult<()> {
        let mut companies = write(&self.companies)?;
        if !companies.contains_key(&company.id) {
            return Err(StoreError::NotFound("company"));
        }
        companies.insert(company.id, company);
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<Company>> {
        Ok(read(&self.companies)?.values().cloned().collect())
    }
}

impl JobStore for MemoryStore {
    fn insert(&self, job: Job) -> StoreResult<()> {
        write(&self.jobs)?.insert(job.id, job);
        Ok(())
    }

    fn get(&self, id: JobId) -> StoreResult<Option<Job>> {
        Ok(read(&self.jobs)?.get(&id).cloned())
    }

    fn update(&self, job: Job) -> StoreResult<()> {
        let mut jobs = write(&self.jobs)?;
        if !jobs.contains_key(&job.id) {
            return Err(StoreError::NotFound("job"));
        }
        jobs.insert(job.id, job);
        Ok(())
    }

    fn delete(&self, id: JobId) -> StoreResult<()> {
        write(&self.jobs)?
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("job"))
    }

    fn list(&self) -> StoreResult<Vec<Job>> {
        Ok(read(&self.jobs)?.values().cloned().collect())
    }

    fn list_by_poster(&self, poster: UserId) -> StoreResult<Vec<Job>> {
        Ok(read(&self.jobs)?
            .values()
            .filter(|j| j.posted_by == poster)
            .cloned()
            .collect())
    }

    fn list_by_company(&self, company: CompanyId) -> StoreResult<Vec<Job>> {
        Ok(read(&self.jobs)?
            .values()
            .filter(|j| j.company == company)
            .cloned()
            .collect())
    }
}

impl ApplicationStore for MemoryStore {
    fn insert(&self, application: Application) -> StoreResult<()> {
        let mut applications = write(&self.applications)?;
        if applications
            .values()
            .any(|a| a.job == application.job && a.candidate == application.candidate)
        {
            return Err(StoreError::duplicate(
                "application",
                format!("candidate {} already applied", application.candidate),
            ));
        }
        applications.insert(application.id, application);
        Ok(())
    }

    fn get(&self, id: ApplicationId) -> StoreResult<Option<Application>> {
        Ok(read(&self.applications)?.get(&id).cloned())
    }

    fn update(&self, application: Application) -> StoreResult<()> {
        let mut applications = write(&self.applications)?;
        if !applications.contains_key(&application.id) {
            return Err(StoreError::NotFound("application"));
        }
        applications.insert(application.id, application);
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<Application>> {
        Ok(read(&self.applications)?.values().cloned().collect())
    }

    fn list_by_candidate(&self, candidate: UserId) -> StoreResult<Vec<Application>> {
        Ok(read(&self.applications)?
            .values()
            .filter(|a| a.candidate == candidate)
            .cloned()
            .collect())
    }

    fn list_by_job(&self, job: JobId) -> StoreResult<Vec<Application>> {
        Ok(read(&self.applications)?
            .values()
            .filter(|a| a.job == job)
            .cloned()
            .collect())
    }

    fn list_for_jobs(&self, jobs: &[JobId]) -> StoreResult<Vec<Application>> {
        Ok(read(&self.applications)?
            .values()
            .filter(|a| jobs.contains(&a.job))
            .cloned()
            .collect())
    }

    fn exists_for(&self, job: JobId, candidate: UserId) -> StoreResult<bool> {
        Ok(read(&self.applications)?
            .values()
            .any(|a| a.job == job && a.candidate == candidate))
    }
}
