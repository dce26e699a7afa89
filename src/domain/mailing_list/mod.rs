// Mailing list domain module
// Contains the signup record, its value objects, and validation

pub mod record;
pub mod value_objects;

// Re-export main types for convenience
pub use record::{MailingListRecord, ValidationError};
pub use value_objects::PhoneNumber;
