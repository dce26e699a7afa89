// Repository traits (ports)
// Implemented by infrastructure adapters

pub mod mailing_list_repository;

pub use mailing_list_repository::{MailingListRepository, StoreError};
