//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every query on a
//! user-owned table filters by `user_id` -- row ownership is the access
//! control mechanism, checked directly on each row rather than inferred
//! through parent joins.

pub mod category_repo;
pub mod file_asset_repo;
pub mod habit_log_repo;
pub mod habit_repo;
pub mod journal_repo;
pub mod page_repo;
pub mod reminder_repo;
pub mod score_repo;
pub mod session_repo;
pub mod todo_repo;
pub mod trash_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use file_asset_repo::FileAssetRepo;
pub use habit_log_repo::HabitLogRepo;
pub use habit_repo::HabitRepo;
pub use journal_repo::JournalRepo;
pub use page_repo::PageRepo;
pub use reminder_repo::ReminderRepo;
pub use score_repo::ScoreRepo;
pub use session_repo::SessionRepo;
pub use todo_repo::TodoRepo;
pub use trash_repo::TrashRepo;
pub use user_repo::UserRepo;
