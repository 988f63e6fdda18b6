/// Platform-specific notifier backends
///
/// Each platform module provides a backend that implements the `Notifier`
/// contract for that specific service.

mod notifier_trait;

pub mod slack;

// Re-export the contract
pub use notifier_trait::Notifier;
