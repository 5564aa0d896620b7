//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Every method issues a
//! single statement.

pub mod chapter_repo;
pub mod character_repo;
pub mod note_repo;
pub mod novel_repo;
pub mod setting_repo;
pub mod user_repo;

pub use chapter_repo::ChapterRepo;
pub use character_repo::CharacterRepo;
pub use note_repo::NoteRepo;
pub use novel_repo::NovelRepo;
pub use setting_repo::SettingRepo;
pub use user_repo::UserRepo;

/// SQL expression for the current UTC time in the RFC 3339 text form the
/// schema stores timestamps in.
pub(crate) const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";
