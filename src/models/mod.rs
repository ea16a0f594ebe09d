pub mod api;
pub mod form_state;
pub mod submission;

pub use api::{ApiResponse, ErrorDetail};
pub use form_state::{FieldErrors, FormState};
pub use submission::{
    NotificationPreference, NotificationType, ProductLine, ProjectSubmission, RawSubmission,
};
