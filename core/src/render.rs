//! Page Renderer
//!
//! Pure mapping from `(Page, &Strings)` to a [`PageBody`] - a
//! surface-agnostic document that describes WHAT a page says, not how it
//! looks. Surfaces translate fragments to their native styling (the TUI
//! maps them to styled terminal lines; a GUI would map them to widgets).
//!
//! All four templates are fixed: sections are statically enumerated and
//! nothing loops over dynamic data. The match over [`Page`] is
//! exhaustive, so there is no unknown-page path.

use crate::content::Strings;
use crate::page::Page;

/// One typed piece of page content
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// Small lead-in line above a title
    Lead(&'static str),
    /// The page's hero title
    Title(&'static str),
    /// Decorative accent rule
    Rule,
    /// Emphasized highlight line (dates)
    Highlight(&'static str),
    /// Bold lead line (times, names)
    Strong(&'static str),
    /// Plain paragraph text
    Text(&'static str),
    /// De-emphasized aside
    Note(&'static str),
    /// Bulleted list item
    Bullet(&'static str),
    /// "Label: value" pair
    LabelValue(&'static str, &'static str),
    /// Vertical spacing between groups within a block
    Gap,
}

/// A bordered content block with an optional heading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBlock {
    /// Block heading, when the block has one
    pub heading: Option<&'static str>,
    /// Fragments in display order
    pub fragments: Vec<Fragment>,
}

impl ContentBlock {
    fn new(heading: &'static str, fragments: Vec<Fragment>) -> Self {
        Self {
            heading: Some(heading),
            fragments,
        }
    }

    fn headless(fragments: Vec<Fragment>) -> Self {
        Self {
            heading: None,
            fragments,
        }
    }
}

/// A fully rendered page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageBody {
    /// Section title shown above the blocks (the hero page has none)
    pub title: Option<&'static str>,
    /// Content blocks in display order
    pub blocks: Vec<ContentBlock>,
}

/// Render a page against one locale's field record
#[must_use]
pub fn render(page: Page, t: &Strings) -> PageBody {
    match page {
        Page::Home => render_home(t),
        Page::Schedule => render_schedule(t),
        Page::Travel => render_travel(t),
        Page::Activities => render_activities(t),
    }
}

fn render_home(t: &Strings) -> PageBody {
    PageBody {
        title: None,
        blocks: vec![ContentBlock::headless(vec![
            Fragment::Lead(t.invitation_line),
            Fragment::Title(t.event_title),
            Fragment::Rule,
            Fragment::Highlight(t.event_dates),
            Fragment::Text(t.venue),
            Fragment::Text(t.venue_city),
        ])],
    }
}

fn render_schedule(t: &Strings) -> PageBody {
    PageBody {
        title: Some(t.schedule_title),
        blocks: vec![
            ContentBlock::new(
                t.friday_heading,
                vec![
                    Fragment::Strong("2:30 PM – 3:30 PM"),
                    Fragment::Text(t.dept_ceremony_one),
                    Fragment::LabelValue(t.location_label, t.ceremony_tent),
                    Fragment::Gap,
                    Fragment::Strong("4:00 PM – 6:00 PM"),
                    Fragment::Text(t.family_dinner),
                    Fragment::Gap,
                    Fragment::Strong("7:30 PM – 9:30 PM"),
                    Fragment::Text(t.dept_ceremony_two),
                    Fragment::LabelValue(t.location_label, t.arena),
                ],
            ),
            ContentBlock::new(
                t.saturday_heading,
                vec![
                    Fragment::Strong("10:00 AM – 11:30 AM"),
                    Fragment::Text(t.commencement),
                    Fragment::LabelValue(t.location_label, t.stadium),
                    Fragment::Gap,
                    Fragment::Note(t.cookout_note),
                ],
            ),
            // Keep this block last: it closes the page on practical advice.
            ContentBlock::new(
                t.wear_heading,
                vec![
                    Fragment::Text(t.wear_desc),
                    Fragment::Gap,
                    Fragment::Text(t.weather_note),
                ],
            ),
        ],
    }
}

fn render_travel(t: &Strings) -> PageBody {
    PageBody {
        title: Some(t.travel_title),
        blocks: vec![
            ContentBlock::new(
                t.flying_heading,
                vec![
                    Fragment::Text(t.airport_info),
                    Fragment::Gap,
                    Fragment::Strong(t.flights_label),
                    Fragment::Bullet(t.flight_range),
                    Fragment::LabelValue(t.important_label, t.baggage_note),
                ],
            ),
            ContentBlock::new(
                t.stay_heading,
                vec![
                    Fragment::Text(t.hotel_range),
                    Fragment::Gap,
                    Fragment::Strong(t.family_airbnb),
                    Fragment::Text("3523 North Franklin Avenue"),
                    Fragment::Text("Loveland, CO 80538"),
                    Fragment::Note(t.limited_rooms),
                    Fragment::Gap,
                    Fragment::Strong(t.recommended_hotels),
                    Fragment::Note(t.hotel_note),
                ],
            ),
            ContentBlock::new(
                t.arrival_heading,
                vec![
                    Fragment::Strong(t.thursday_label),
                    Fragment::Text(t.thursday_desc),
                    Fragment::Gap,
                    Fragment::Strong(t.sunday_label),
                    Fragment::Text(t.sunday_desc),
                ],
            ),
        ],
    }
}

fn render_activities(t: &Strings) -> PageBody {
    PageBody {
        title: Some(t.activities_title),
        blocks: vec![
            ContentBlock::new(
                t.attractions_heading,
                vec![
                    Fragment::Strong(t.gardens_name),
                    Fragment::Text(t.gardens_desc),
                    Fragment::Gap,
                    Fragment::Strong(t.old_town_name),
                    Fragment::Text(t.old_town_desc),
                ],
            ),
            ContentBlock::new(
                t.day_trips_heading,
                vec![
                    Fragment::Strong(t.mountain_park_name),
                    Fragment::Text(t.mountain_park_desc),
                    Fragment::Gap,
                    Fragment::Strong(t.reservoir_name),
                    Fragment::Text(t.reservoir_desc),
                    Fragment::Gap,
                    Fragment::Strong(t.canyon_name),
                    Fragment::Text(t.canyon_desc),
                ],
            ),
            ContentBlock::new(t.campus_heading, vec![Fragment::Text(t.campus_desc)]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::strings;
    use crate::locale::Locale;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_page_renders_content_for_both_locales() {
        for locale in [Locale::English, Locale::Spanish] {
            let t = strings(locale);
            for page in Page::ALL {
                let body = render(page, t);
                assert!(!body.blocks.is_empty(), "{page:?} rendered empty");
                assert!(body
                    .blocks
                    .iter()
                    .all(|block| !block.fragments.is_empty()));
            }
        }
    }

    #[test]
    fn home_is_the_only_hero_page() {
        let t = strings(Locale::English);
        assert_eq!(render(Page::Home, t).title, None);
        for page in [Page::Schedule, Page::Travel, Page::Activities] {
            assert!(render(page, t).title.is_some());
        }
    }

    #[test]
    fn schedule_ends_with_the_attire_block() {
        for locale in [Locale::English, Locale::Spanish] {
            let t = strings(locale);
            let body = render(Page::Schedule, t);
            assert_eq!(body.blocks.last().unwrap().heading, Some(t.wear_heading));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let t = strings(Locale::Spanish);
        assert_eq!(render(Page::Travel, t), render(Page::Travel, t));
    }
}
