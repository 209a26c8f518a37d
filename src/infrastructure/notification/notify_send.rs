//! notify-send notification adapter

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self {
            app_name: "Annonce de Lola".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(
        &self,
        summary: &str,
        body: &str,
        icon: Option<&Path>,
    ) -> Result<(), NotificationError> {
        let mut command = Command::new("notify-send");
        command.args(["--app-name", &self.app_name, "--urgency", "normal"]);
        if let Some(icon) = icon {
            command.arg("--icon").arg(icon);
        }

        // Output is captured, never inherited; failures surface it in the
        // error for debug logging.
        let output = command
            .arg(summary)
            .arg(body)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::ToolNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            return Err(NotificationError::ToolFailed {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_creates_successfully() {
        let notifier = NotifySendNotifier::new();
        assert_eq!(notifier.app_name, "Annonce de Lola");
    }

    #[test]
    fn notifier_with_custom_app_name() {
        let notifier = NotifySendNotifier::with_app_name("TestApp");
        assert_eq!(notifier.app_name, "TestApp");
    }

    #[test]
    fn notifier_default_creates() {
        let notifier = NotifySendNotifier::default();
        assert_eq!(notifier.app_name, "Annonce de Lola");
    }
}
