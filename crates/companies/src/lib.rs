//! `hireboard-companies` — company records and company-scoped roles.

pub mod company;
pub mod policy;

pub use company::{Address, Company, CompanyRole, Employee, NewCompany, UpdateCompany};
pub use policy::{authorize_create, authorize_manage};
