//! Announcement formatter

use std::fmt;

use crate::domain::calendar::{CalendarTable, WeekdayNames};
use crate::domain::error::AnnounceError;

use super::date::AnnouncementDate;

/// The composed two-line announcement.
///
/// The first line is the notification body, the second the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    body: String,
    summary: String,
}

impl Announcement {
    /// Line 1: the greeting naming the day and its hallowed object
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Line 2: the collective wish
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.body, self.summary)
    }
}

/// Compose the announcement for the given date.
///
/// Pure function of the date and the two tables. All failures are data
/// errors; the caller treats them as fatal.
pub fn compose(
    date: AnnouncementDate,
    table: &CalendarTable,
    weekdays: &WeekdayNames,
) -> Result<Announcement, AnnounceError> {
    let weekday_name = weekdays.name(date.weekday)?;
    let entry = table.entry(date.month, date.day)?;

    let singular = capitalize(entry.singular);
    let plural = capitalize(entry.plural);
    let (prefix, collective) = entry.gender.agreement();

    Ok(Announcement {
        body: format!(
            "Chalut ! Aujourd'hui, {} {}, c'est la {}-{}.",
            weekday_name, date.day, prefix, singular
        ),
        summary: format!("Bonne fête à {} les {} 🎆", collective, plural),
    })
}

/// Uppercase the first character, leave the rest unchanged.
fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (CalendarTable, WeekdayNames) {
        (CalendarTable::new(), WeekdayNames::new())
    }

    #[test]
    fn reference_vector() {
        let (table, weekdays) = fixtures();
        let announcement =
            compose(AnnouncementDate::new(1, 1, 0), &table, &weekdays).unwrap();
        assert_eq!(
            announcement.to_string(),
            "Chalut ! Aujourd'hui, Lourdi 1, c'est la Sainte-Veisalgie.\n\
             Bonne fête à toutes les Veisalgies 🎆"
        );
    }

    #[test]
    fn body_and_summary_split() {
        let (table, weekdays) = fixtures();
        let announcement =
            compose(AnnouncementDate::new(1, 1, 0), &table, &weekdays).unwrap();
        assert_eq!(
            announcement.body(),
            "Chalut ! Aujourd'hui, Lourdi 1, c'est la Sainte-Veisalgie."
        );
        assert_eq!(announcement.summary(), "Bonne fête à toutes les Veisalgies 🎆");
    }

    #[test]
    fn masculine_agreement_forms() {
        let (table, weekdays) = fixtures();
        // (1, 2) ankylostome is masculine
        let announcement =
            compose(AnnouncementDate::new(1, 2, 1), &table, &weekdays).unwrap();
        assert!(announcement.body().contains("Saint-Ankylostome"));
        assert!(announcement.summary().contains("tous les Ankylostomes"));
    }

    #[test]
    fn neutral_uses_masculine_forms() {
        let (table, weekdays) = fixtures();
        // (8, 7) tzatziki is the neutral entry
        let announcement =
            compose(AnnouncementDate::new(8, 7, 4), &table, &weekdays).unwrap();
        assert!(announcement.body().contains("Saint-Tzatziki"));
        assert!(announcement.summary().contains("tous les Tzatzikis"));
    }

    #[test]
    fn day_renders_without_leading_zero() {
        let (table, weekdays) = fixtures();
        let announcement =
            compose(AnnouncementDate::new(3, 4, 2), &table, &weekdays).unwrap();
        assert!(announcement.body().contains("Morquidi 4,"));
    }

    #[test]
    fn invalid_weekday_is_fatal() {
        let (table, weekdays) = fixtures();
        let err = compose(AnnouncementDate::new(1, 1, 7), &table, &weekdays).unwrap_err();
        assert!(matches!(err, AnnounceError::Weekday(_)));
    }

    #[test]
    fn missing_entry_is_fatal() {
        let (table, weekdays) = fixtures();
        let err = compose(AnnouncementDate::new(2, 30, 0), &table, &weekdays).unwrap_err();
        assert!(matches!(err, AnnounceError::Calendar(_)));
    }

    #[test]
    fn capitalize_uppercases_first_letter_only() {
        assert_eq!(capitalize("veisalgie"), "Veisalgie");
        assert_eq!(capitalize("sac à dos"), "Sac à dos");
        assert_eq!(capitalize("élytre"), "Élytre");
    }

    #[test]
    fn capitalize_is_idempotent() {
        for noun in ["veisalgie", "Veisalgie", "élytre", "Élytre", "tour eiffel"] {
            let once = capitalize(noun);
            assert_eq!(capitalize(&once), once);
        }
    }

    #[test]
    fn capitalize_handles_empty_input() {
        assert_eq!(capitalize(""), "");
    }
}
