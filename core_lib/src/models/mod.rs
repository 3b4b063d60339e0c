//! Request and response models

pub mod contact;
pub mod outcome;

pub use contact::{ContactForm, ContactSubmission};
pub use outcome::{MessageResponse, RelayOutcome, StatusResponse};
