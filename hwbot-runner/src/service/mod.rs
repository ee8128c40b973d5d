//! Service layer
//!
//! Services contain business logic for the bot on top of the repositories.
//!
//! All services are trait-based to enable testing and dependency injection.

mod notifier;

// Re-export traits
pub use notifier::Notifier;

// Re-export implementations
pub use notifier::StandardNotifier;
