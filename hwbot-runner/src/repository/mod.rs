//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They give the
//! poll loop narrow, async interfaces for the two external services
//! without any business logic.
//!
//! All repositories are trait-based to enable testing and mocking.

mod homeworks;
mod messages;

// Re-export traits
pub use homeworks::HomeworkRepository;
pub use messages::MessageRepository;

// Re-export implementations
pub use homeworks::HttpHomeworkRepository;
pub use messages::TelegramMessageRepository;
