//! `hireboard-applications` — job applications and their lifecycle.

pub mod application;
pub mod policy;

pub use application::{Application, ApplicationStatus, Note};
pub use policy::{authorize_apply, authorize_review, authorize_view};
