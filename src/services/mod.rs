pub mod context;
pub mod projects_api;
pub mod submission_service;

pub use context::RequestContext;
pub use projects_api::{HttpProjectsApi, ProjectsApi};
pub use submission_service::{SubmissionOutcome, SubmissionService};
