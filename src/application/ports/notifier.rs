//! Notification port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("notification tool not found")]
    ToolNotFound,

    #[error("notification tool exited with code {code:?}")]
    ToolFailed {
        /// Exit code, if the tool exited normally
        code: Option<i32>,
        /// Captured standard output of the failed invocation
        stdout: String,
        /// Captured standard error of the failed invocation
        stderr: String,
    },

    #[error("Failed to send notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `summary` - The notification summary (title)
    /// * `body` - The notification body
    /// * `icon` - Optional icon image path
    ///
    /// # Returns
    /// Ok(()) on success, a structured error otherwise; callers branch on
    /// the variant rather than unwinding.
    async fn notify(
        &self,
        summary: &str,
        body: &str,
        icon: Option<&Path>,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        summary: &str,
        body: &str,
        icon: Option<&Path>,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(summary, body, icon).await
    }
}
