//! Weekday names of the custom calendar

use crate::domain::error::InvalidWeekdayError;

/// The seven custom weekday names, indexed 0 (Monday-equivalent) through 6.
#[derive(Debug, Clone, Copy)]
pub struct WeekdayNames {
    names: [&'static str; 7],
}

impl WeekdayNames {
    /// Create the weekday name list
    pub fn new() -> Self {
        Self {
            names: [
                "Lourdi", "Pardi", "Morquidi", "Jourdi", "Dendrevi", "Sordi", "Mitanche",
            ],
        }
    }

    /// Resolve the name for a 0-based weekday index.
    pub fn name(&self, index: u32) -> Result<&'static str, InvalidWeekdayError> {
        self.names
            .get(index as usize)
            .copied()
            .ok_or(InvalidWeekdayError { index })
    }
}

impl Default for WeekdayNames {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_seven_indices_resolve() {
        let weekdays = WeekdayNames::new();
        for index in 0..7 {
            let name = weekdays.name(index).unwrap();
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn week_starts_on_lourdi() {
        let weekdays = WeekdayNames::new();
        assert_eq!(weekdays.name(0).unwrap(), "Lourdi");
        assert_eq!(weekdays.name(6).unwrap(), "Mitanche");
    }

    #[test]
    fn out_of_range_index_fails() {
        let weekdays = WeekdayNames::new();
        assert!(weekdays.name(7).is_err());
        assert!(weekdays.name(u32::MAX).is_err());
    }

    #[test]
    fn error_reports_offending_index() {
        let err = WeekdayNames::new().name(9).unwrap_err();
        assert_eq!(err.index, 9);
        assert!(err.to_string().contains('9'));
    }
}
