//! Announcement date value object

use chrono::{Datelike, Local};

/// Calendar coordinates of the day to announce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncementDate {
    /// 1-based month
    pub month: u32,
    /// 1-based day of month
    pub day: u32,
    /// 0-based weekday index, 0 = Monday-equivalent
    pub weekday: u32,
}

impl AnnouncementDate {
    /// Create a date from explicit coordinates
    pub fn new(month: u32, day: u32, weekday: u32) -> Self {
        Self {
            month,
            day,
            weekday,
        }
    }

    /// Today's date from the local clock.
    pub fn today() -> Self {
        let now = Local::now();
        Self {
            month: now.month(),
            day: now.day(),
            weekday: now.weekday().num_days_from_monday(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_in_range() {
        let today = AnnouncementDate::today();
        assert!((1..=12).contains(&today.month));
        assert!((1..=31).contains(&today.day));
        assert!(today.weekday <= 6);
    }

    #[test]
    fn new_keeps_coordinates() {
        let date = AnnouncementDate::new(8, 7, 4);
        assert_eq!(date.month, 8);
        assert_eq!(date.day, 7);
        assert_eq!(date.weekday, 4);
    }
}
