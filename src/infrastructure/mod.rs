//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces and the
//! embedded icon asset.

pub mod icon;
pub mod notification;

// Re-export adapters
pub use icon::ensure_icon;
pub use notification::{create_notifier, NotifyRustNotifier, NotifySendNotifier};
