use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hireboard_core::{CompanyId, DomainError, DomainResult, EmployeeId, UserId};

/// Role of an employee *within a company*, distinct from the global
/// [`hireboard_auth::Role`]. Only `Admin` entries may manage the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyRole {
    Admin,
    Recruiter,
    HiringManager,
}

/// Membership link between a user and a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub user: UserId,
    pub role: CompanyRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

/// A company that posts jobs.
///
/// # Invariants
/// - `name` is unique across companies (case-sensitive; enforced by the store).
/// - `employees` holds at most one entry per user.
///
/// Jobs belonging to a company are derived at query time from `Job.company`;
/// no job-id list is stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
    pub employees: Vec<Employee>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
}

/// Partial update; `None` keeps the existing value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompany {
    pub description: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
}

impl Company {
    pub fn create(input: NewCompany, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("company name cannot be empty"));
        }

        Ok(Self {
            id: CompanyId::new(),
            name: name.to_string(),
            description: input.description,
            industry: input.industry,
            website: input.website,
            address: input.address,
            employees: Vec::new(),
            created_at: now,
        })
    }

    /// Whether `user` holds a company-scoped admin entry.
    pub fn is_company_admin(&self, user: UserId) -> bool {
        self.employees
            .iter()
            .any(|e| e.user == user && e.role == CompanyRole::Admin)
    }

    pub fn employee_of(&self, user: UserId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.user == user)
    }

    /// Add an employee entry. At most one entry per user.
    pub fn add_employee(&mut self, user: UserId, role: CompanyRole) -> DomainResult<&Employee> {
        if self.employee_of(user).is_some() {
            return Err(DomainError::conflict(format!(
                "user {user} is already an employee"
            )));
        }

        self.employees.push(Employee {
            id: EmployeeId::new(),
            user,
            role,
        });
        Ok(self.employees.last().expect("just pushed"))
    }

    /// Remove an employee entry by its entry id.
    ///
    /// A missing entry is an error, not a silent no-op.
    pub fn remove_employee(&mut self, employee_id: EmployeeId) -> DomainResult<Employee> {
        let idx = self
            .employees
            .iter()
            .position(|e| e.id == employee_id)
            .ok_or(DomainError::not_found("employee"))?;
        Ok(self.employees.remove(idx))
    }

    pub fn apply_update(&mut self, update: UpdateCompany) {
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(industry) = update.industry {
            self.industry = Some(industry);
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
    }
}
