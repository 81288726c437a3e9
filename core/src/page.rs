//! Page Identifiers
//!
//! The guide is a single-screen application with four navigable content
//! sections. The enumeration is closed: every consumer matches on it
//! exhaustively, so an unknown page cannot reach the renderer.

/// The four content sections of the guide
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    /// Invitation hero (default landing section)
    #[default]
    Home,
    /// Two-day ceremony schedule
    Schedule,
    /// Flights, lodging, arrival and departure
    Travel,
    /// Things to do around town
    Activities,
}

impl Page {
    /// All pages, in navigation order
    pub const ALL: [Self; 4] = [Self::Home, Self::Schedule, Self::Travel, Self::Activities];

    /// Identifier used in the persisted state file
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Schedule => "schedule",
            Self::Travel => "travel",
            Self::Activities => "activities",
        }
    }

    /// Parse a persisted identifier
    ///
    /// Returns `None` for unknown identifiers; callers fall back to
    /// [`Page::Home`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.code() == code)
    }

    /// The page after this one in navigation order (wrapping)
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Schedule,
            Self::Schedule => Self::Travel,
            Self::Travel => Self::Activities,
            Self::Activities => Self::Home,
        }
    }

    /// The page before this one in navigation order (wrapping)
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Home => Self::Activities,
            Self::Schedule => Self::Home,
            Self::Travel => Self::Schedule,
            Self::Activities => Self::Travel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_code(page.code()), Some(page));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Page::from_code("contact"), None);
        assert_eq!(Page::from_code(""), None);
    }

    #[test]
    fn navigation_order_wraps_both_ways() {
        for page in Page::ALL {
            assert_eq!(page.next().previous(), page);
            assert_eq!(page.previous().next(), page);
        }
        // Four steps forward is a full cycle.
        let back_home = Page::Home.next().next().next().next();
        assert_eq!(back_home, Page::Home);
    }
}
