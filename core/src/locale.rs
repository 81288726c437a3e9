//! Locale Selection
//!
//! festejo speaks exactly two languages. The selected locale is
//! process-wide state owned by the [`Guide`](crate::guide::Guide) and
//! persisted across visits as a raw two-letter code.

/// The two supported display languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English (default)
    #[default]
    English,
    /// Spanish
    Spanish,
}

impl Locale {
    /// The other locale
    ///
    /// Flipping twice always returns to the starting locale.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Spanish,
            Self::Spanish => Self::English,
        }
    }

    /// Two-letter code used in the persisted state file
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Parse a persisted code
    ///
    /// Returns `None` for anything that is not exactly one of the two
    /// known codes; callers fall back to the default locale.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Locale::English.toggled(), Locale::Spanish);
        assert_eq!(Locale::Spanish.toggled(), Locale::English);
        assert_eq!(Locale::English.toggled().toggled(), Locale::English);
    }

    #[test]
    fn codes_round_trip() {
        for locale in [Locale::English, Locale::Spanish] {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code("fr"), None);
    }
}
