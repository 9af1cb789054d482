//! The intake wizard: fixed step sequence, submission lifecycle, and the
//! session controller that ties the record to the two collaborators.

pub mod routes;
pub mod session;
pub mod state;
pub mod step;
pub mod view;

pub use routes::portal_routes;
pub use session::{SUBMISSION_ERROR, SessionStatus, StepStatus, WizardSession};
pub use state::SubmissionState;
pub use step::WizardStep;
pub use view::{ReviewSnapshot, SectionVisibility};
