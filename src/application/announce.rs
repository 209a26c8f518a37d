//! Daily announce use case

use std::path::PathBuf;

use tracing::debug;

use crate::domain::announcement::{compose, Announcement, AnnouncementDate};
use crate::domain::calendar::{CalendarTable, WeekdayNames};
use crate::domain::error::AnnounceError;

use super::ports::{NotificationError, Notifier};

/// Input parameters for the announce use case
#[derive(Debug, Clone)]
pub struct AnnounceInput {
    /// The date to announce
    pub date: AnnouncementDate,
    /// Icon image for the notification, if one could be materialized
    pub icon: Option<PathBuf>,
    /// Whether to deliver a desktop notification
    pub enable_notify: bool,
}

/// Output from the announce use case
#[derive(Debug, Clone)]
pub struct AnnounceOutput {
    /// The composed announcement
    pub announcement: Announcement,
    /// Whether notification delivery succeeded (if enabled)
    pub notified: bool,
}

/// One-shot announcement use case
pub struct AnnounceUseCase<N: Notifier> {
    table: CalendarTable,
    weekdays: WeekdayNames,
    notifier: N,
}

impl<N: Notifier> AnnounceUseCase<N> {
    /// Create a new use case instance
    pub fn new(table: CalendarTable, weekdays: WeekdayNames, notifier: N) -> Self {
        Self {
            table,
            weekdays,
            notifier,
        }
    }

    /// Execute the announcement workflow.
    ///
    /// Composition failures are fatal and propagate. Delivery failures are
    /// recovered to `notified: false` so the caller can map them to an
    /// exit status; diagnostics go to the debug log only.
    pub async fn execute(&self, input: AnnounceInput) -> Result<AnnounceOutput, AnnounceError> {
        let announcement = compose(input.date, &self.table, &self.weekdays)?;

        let notified = if input.enable_notify {
            match self
                .notifier
                .notify(
                    announcement.summary(),
                    announcement.body(),
                    input.icon.as_deref(),
                )
                .await
            {
                Ok(()) => true,
                Err(NotificationError::ToolNotFound) => {
                    debug!("Is notify-send available?");
                    false
                }
                Err(NotificationError::ToolFailed {
                    code,
                    stdout,
                    stderr,
                }) => {
                    debug!(?code, %stdout, %stderr, "Notification tool failed");
                    false
                }
                Err(e) => {
                    debug!("Failed to launch notification tool: {}", e);
                    false
                }
            }
        } else {
            false
        };

        Ok(AnnounceOutput {
            announcement,
            notified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;

    fn input(enable_notify: bool) -> AnnounceInput {
        AnnounceInput {
            date: AnnouncementDate::new(1, 1, 0),
            icon: None,
            enable_notify,
        }
    }

    fn use_case<N: Notifier>(notifier: N) -> AnnounceUseCase<N> {
        AnnounceUseCase::new(CalendarTable::new(), WeekdayNames::new(), notifier)
    }

    // Mock implementations for testing
    struct OkNotifier;

    #[async_trait]
    impl Notifier for OkNotifier {
        async fn notify(
            &self,
            _summary: &str,
            _body: &str,
            _icon: Option<&Path>,
        ) -> Result<(), NotificationError> {
            Ok(())
        }
    }

    struct FailingNotifier(NotificationError);

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(
            &self,
            _summary: &str,
            _body: &str,
            _icon: Option<&Path>,
        ) -> Result<(), NotificationError> {
            Err(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        calls: Mutex<Vec<(String, String, Option<PathBuf>)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(
            &self,
            summary: &str,
            body: &str,
            icon: Option<&Path>,
        ) -> Result<(), NotificationError> {
            self.calls.lock().unwrap().push((
                summary.to_string(),
                body.to_string(),
                icon.map(Path::to_path_buf),
            ));
            Ok(())
        }
    }

    #[tokio::test]
    async fn succeeding_notifier_reports_notified() {
        let output = use_case(OkNotifier).execute(input(true)).await.unwrap();
        assert!(output.notified);
    }

    #[tokio::test]
    async fn missing_tool_recovers_to_not_notified() {
        let output = use_case(FailingNotifier(NotificationError::ToolNotFound))
            .execute(input(true))
            .await
            .unwrap();
        assert!(!output.notified);
    }

    #[tokio::test]
    async fn tool_failure_recovers_to_not_notified() {
        let err = NotificationError::ToolFailed {
            code: Some(1),
            stdout: String::new(),
            stderr: "no notification daemon".to_string(),
        };
        let output = use_case(FailingNotifier(err))
            .execute(input(true))
            .await
            .unwrap();
        assert!(!output.notified);
    }

    #[tokio::test]
    async fn disabled_notify_skips_the_notifier() {
        let notifier = RecordingNotifier::default();
        let use_case = AnnounceUseCase::new(CalendarTable::new(), WeekdayNames::new(), notifier);

        let output = use_case.execute(input(false)).await.unwrap();
        assert!(!output.notified);
        assert_eq!(
            output.announcement.body(),
            "Chalut ! Aujourd'hui, Lourdi 1, c'est la Sainte-Veisalgie."
        );
        assert!(use_case.notifier.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn summary_is_the_second_line() {
        let notifier = RecordingNotifier::default();
        let use_case = AnnounceUseCase::new(CalendarTable::new(), WeekdayNames::new(), notifier);

        let mut with_icon = input(true);
        with_icon.icon = Some(PathBuf::from("/tmp/lola.png"));
        use_case.execute(with_icon).await.unwrap();

        let calls = use_case.notifier.calls.lock().unwrap();
        let (summary, body, icon) = &calls[0];
        assert_eq!(summary, "Bonne fête à toutes les Veisalgies 🎆");
        assert_eq!(body, "Chalut ! Aujourd'hui, Lourdi 1, c'est la Sainte-Veisalgie.");
        assert_eq!(icon.as_deref(), Some(Path::new("/tmp/lola.png")));
    }

    #[tokio::test]
    async fn data_error_propagates_before_any_notification() {
        let notifier = RecordingNotifier::default();
        let use_case = AnnounceUseCase::new(CalendarTable::new(), WeekdayNames::new(), notifier);

        let bad_weekday = AnnounceInput {
            date: AnnouncementDate::new(1, 1, 9),
            icon: None,
            enable_notify: true,
        };
        assert!(use_case.execute(bad_weekday).await.is_err());
        assert!(use_case.notifier.calls.lock().unwrap().is_empty());
    }
}
