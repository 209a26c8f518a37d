//! Day entry value object

/// Grammatical gender of a hallowed object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neutral,
}

impl Gender {
    /// Agreement pair for this gender: the hallow prefix and the
    /// collective pronoun.
    ///
    /// Neutral takes the masculine forms; the calendar carries no distinct
    /// neutral agreement.
    pub const fn agreement(self) -> (&'static str, &'static str) {
        match self {
            Self::Feminine => ("Sainte", "toutes"),
            Self::Masculine | Self::Neutral => ("Saint", "tous"),
        }
    }
}

/// One day's hallowed object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    /// Singular noun, lowercase as it appears in the source data
    pub singular: &'static str,
    /// Plural noun
    pub plural: &'static str,
    /// Grammatical gender driving prefix and pronoun selection
    pub gender: Gender,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feminine_agreement() {
        assert_eq!(Gender::Feminine.agreement(), ("Sainte", "toutes"));
    }

    #[test]
    fn masculine_agreement() {
        assert_eq!(Gender::Masculine.agreement(), ("Saint", "tous"));
    }

    #[test]
    fn neutral_takes_masculine_forms() {
        assert_eq!(Gender::Neutral.agreement(), Gender::Masculine.agreement());
    }
}
