// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod supabase_mailing_list_repository;

pub use supabase_mailing_list_repository::SupabaseMailingListRepository;
