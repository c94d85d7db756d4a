//! State management module
//!
//! This module holds the startup registration draft, its validation schemas
//! and the multi-step controller driving them.

pub mod draft;
pub mod schema;
pub mod flow;

// Re-export commonly used state components
pub use draft::{
    AddressField, DraftField, FieldKind, FieldRef, FieldValue, FileHandle, FounderField, LegalField, ProfileField,
    RegistrationDraft, Step,
};
pub use schema::{FieldRule, InputType, RegistrationSchema, StepSchema};
pub use flow::{FlowState, RegistrationFlow, StepStatus, SubmissionReceipt, SUBMISSION_FAILED_MESSAGE};
