//! Main app runner

use std::process::ExitCode;

use tracing::debug;

use crate::application::{AnnounceInput, AnnounceUseCase};
use crate::domain::announcement::{compose, AnnouncementDate};
use crate::domain::calendar::{CalendarTable, WeekdayNames};
use crate::infrastructure::{create_notifier, ensure_icon};

use super::args::AnnounceOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run the daily announcement
pub async fn run_announce(options: AnnounceOptions) -> ExitCode {
    let presenter = Presenter::new();

    let table = CalendarTable::new();
    let weekdays = WeekdayNames::new();
    let date = AnnouncementDate::today();

    if options.stdout {
        // Print-only path: no icon, no notifier, no external process.
        return match compose(date, &table, &weekdays) {
            Ok(announcement) => {
                presenter.output(&announcement.to_string());
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    // Icon failure is not fatal; the notification goes out without one.
    let icon = match ensure_icon().await {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("Icon unavailable: {}", e);
            None
        }
    };

    let notifier = create_notifier();
    let use_case = AnnounceUseCase::new(table, weekdays, notifier);

    let input = AnnounceInput {
        date,
        icon,
        enable_notify: true,
    };

    match use_case.execute(input).await {
        Ok(output) if output.notified => ExitCode::from(EXIT_SUCCESS),
        Ok(_) => ExitCode::from(EXIT_ERROR),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
