//! Form domain layer
//!
//! Typed field bindings, the validation schema, step definitions and the
//! registration form controller.

mod field;
mod form_state;
pub mod schema;
mod steps;

pub use field::{FieldBinding, FieldName, FormValues};
pub use form_state::{Form, FormAction, FormState, StepChange, SubmissionOutcome, SubmitOutcome};
pub use steps::StepGating;
