//! Bilingual Content Table
//!
//! One complete record of display strings per locale. The record is a
//! struct of `&'static str` fields, so the two locales cannot drift out
//! of key parity: removing or renaming a field in one table is a compile
//! error, not a runtime lookup miss. There is no fallback locale and no
//! partial lookup - [`strings`] hands out the whole record.
//!
//! Content authoring lives entirely in this module; the renderer and the
//! UI only ever see field names.

use chrono::NaiveDate;

use crate::locale::Locale;
use crate::page::Page;

/// The complete set of display strings for one locale
///
/// Every field is referenced by at least one page template, the
/// navigation chrome, or the intro overlay.
#[derive(Debug)]
pub struct Strings {
    // --- Chrome ---
    /// Language toggle label (names the *other* language)
    pub lang_toggle: &'static str,
    /// Navigation label for the home section
    pub nav_home: &'static str,
    /// Navigation label for the schedule section
    pub nav_schedule: &'static str,
    /// Navigation label for the travel section
    pub nav_travel: &'static str,
    /// Navigation label for the activities section
    pub nav_activities: &'static str,
    /// "Location" label for venue lines
    pub location_label: &'static str,
    /// Countdown suffix, e.g. "days until the ceremony"
    pub days_to_go: &'static str,
    /// Status-bar hint for page navigation keys
    pub hint_navigate: &'static str,
    /// Status-bar hint for the language toggle key
    pub hint_language: &'static str,
    /// Status-bar hint for the quit key
    pub hint_quit: &'static str,

    // --- Intro overlay ---
    /// Large line on the one-time intro banner
    pub intro_title: &'static str,
    /// Small caption under the intro banner
    pub intro_caption: &'static str,

    // --- Home ---
    /// Invitation lead-in above the title
    pub invitation_line: &'static str,
    /// The event title
    pub event_title: &'static str,
    /// Event dates, spelled out
    pub event_dates: &'static str,
    /// Venue name
    pub venue: &'static str,
    /// Venue city and state
    pub venue_city: &'static str,

    // --- Schedule ---
    /// Schedule page title
    pub schedule_title: &'static str,
    /// Friday block heading
    pub friday_heading: &'static str,
    /// Saturday block heading
    pub saturday_heading: &'static str,
    /// First departmental ceremony
    pub dept_ceremony_one: &'static str,
    /// Venue for the first ceremony
    pub ceremony_tent: &'static str,
    /// Friday family dinner
    pub family_dinner: &'static str,
    /// Second departmental ceremony
    pub dept_ceremony_two: &'static str,
    /// Venue for the second ceremony
    pub arena: &'static str,
    /// Saturday university-wide commencement
    pub commencement: &'static str,
    /// Venue for commencement
    pub stadium: &'static str,
    /// Post-commencement cookout note
    pub cookout_note: &'static str,
    /// "What to wear" block heading
    pub wear_heading: &'static str,
    /// Attire description
    pub wear_desc: &'static str,
    /// Weather caveat
    pub weather_note: &'static str,

    // --- Travel ---
    /// Travel page title
    pub travel_title: &'static str,
    /// "Flying in" block heading
    pub flying_heading: &'static str,
    /// Closest-airport description
    pub airport_info: &'static str,
    /// Flight pricing lead line
    pub flights_label: &'static str,
    /// Typical fare range
    pub flight_range: &'static str,
    /// "Important" emphasis label
    pub important_label: &'static str,
    /// Budget-carrier baggage warning
    pub baggage_note: &'static str,
    /// "Where to stay" block heading
    pub stay_heading: &'static str,
    /// Hotel price range near campus
    pub hotel_range: &'static str,
    /// Family Airbnb lead line
    pub family_airbnb: &'static str,
    /// Airbnb availability note
    pub limited_rooms: &'static str,
    /// Recommended hotels lead line
    pub recommended_hotels: &'static str,
    /// Hotel booking caveat
    pub hotel_note: &'static str,
    /// "Arriving & departing" block heading
    pub arrival_heading: &'static str,
    /// Thursday label
    pub thursday_label: &'static str,
    /// Thursday arrival description
    pub thursday_desc: &'static str,
    /// Sunday label
    pub sunday_label: &'static str,
    /// Sunday departure description
    pub sunday_desc: &'static str,

    // --- Activities ---
    /// Activities page title
    pub activities_title: &'static str,
    /// "Local attractions" block heading
    pub attractions_heading: &'static str,
    /// Botanic gardens name
    pub gardens_name: &'static str,
    /// Botanic gardens description
    pub gardens_desc: &'static str,
    /// Old Town name
    pub old_town_name: &'static str,
    /// Old Town description
    pub old_town_desc: &'static str,
    /// "Day trips" block heading
    pub day_trips_heading: &'static str,
    /// National park name
    pub mountain_park_name: &'static str,
    /// National park description
    pub mountain_park_desc: &'static str,
    /// Reservoir name
    pub reservoir_name: &'static str,
    /// Reservoir description
    pub reservoir_desc: &'static str,
    /// Canyon name
    pub canyon_name: &'static str,
    /// Canyon description
    pub canyon_desc: &'static str,
    /// "Campus tour" block heading
    pub campus_heading: &'static str,
    /// Campus tour description
    pub campus_desc: &'static str,
}

impl Strings {
    /// Navigation label for a page
    #[must_use]
    pub fn nav_label(&self, page: Page) -> &'static str {
        match page {
            Page::Home => self.nav_home,
            Page::Schedule => self.nav_schedule,
            Page::Travel => self.nav_travel,
            Page::Activities => self.nav_activities,
        }
    }
}

/// The complete field record for a locale
#[must_use]
pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::English => &EN,
        Locale::Spanish => &ES,
    }
}

/// Date of the university-wide commencement
///
/// Used for the countdown line; `None` never occurs for the constant
/// below but the `Option` keeps the call site panic-free.
#[must_use]
pub fn ceremony_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 5, 16)
}

/// English content table
static EN: Strings = Strings {
    lang_toggle: "Español",
    nav_home: "Home",
    nav_schedule: "Schedule",
    nav_travel: "Travel",
    nav_activities: "Activities",
    location_label: "Location",
    days_to_go: "days until the ceremony",
    hint_navigate: "1-4/←→ pages",
    hint_language: "l language",
    hint_quit: "q quit",

    intro_title: "CLASS OF 2026",
    intro_caption: "Congratulations, Maya!",

    invitation_line: "You're invited to celebrate",
    event_title: "Maya's Graduation Weekend",
    event_dates: "May 15 & 16, 2026",
    venue: "Colorado State University",
    venue_city: "Fort Collins, Colorado",

    schedule_title: "Weekend Schedule",
    friday_heading: "Friday, May 15",
    saturday_heading: "Saturday, May 16",
    dept_ceremony_one: "Ethnic Studies departmental ceremony",
    ceremony_tent: "Ceremony tent, west lawn",
    family_dinner: "Family dinner in Old Town",
    dept_ceremony_two: "Computer Science departmental ceremony",
    arena: "Moby Arena",
    commencement: "University-wide commencement",
    stadium: "Canvas Stadium",
    cookout_note: "Backyard cookout at the family Airbnb afterwards - everyone is welcome.",
    wear_heading: "What to wear",
    wear_desc: "Smart casual works for everything: the ceremonies are outdoors or in the arena, and nothing is formal.",
    weather_note: "May in the Front Range swings between sun and snow - bring a warm layer for the evenings.",

    travel_title: "Getting Here",
    flying_heading: "Flying in",
    airport_info: "Denver International (DEN) is the closest major airport, about 75 minutes south of Fort Collins by car or shuttle.",
    flights_label: "Flights",
    flight_range: "Round trips from most major cities run $150–$350 when booked a month out.",
    important_label: "Important",
    baggage_note: "Frontier and the other budget carriers charge for every bag - check the fare rules before booking.",
    stay_heading: "Where to stay",
    hotel_range: "Hotels near campus run $120–$180 a night over graduation weekend.",
    family_airbnb: "Family Airbnb",
    limited_rooms: "A few rooms are still open - ask Maya if you'd like one.",
    recommended_hotels: "Recommended hotels",
    hotel_note: "Book early; everything within walking distance of campus sells out for graduation.",
    arrival_heading: "Arriving & departing",
    thursday_label: "Thursday, May 14",
    thursday_desc: "Most of the family lands Thursday evening and gathers at the Airbnb for a late dinner.",
    sunday_label: "Sunday, May 17",
    sunday_desc: "Checkout is at 10 AM, with a farewell brunch before everyone heads to the airport.",

    activities_title: "While You're in Town",
    attractions_heading: "Local attractions",
    gardens_name: "Gardens on Spring Creek",
    gardens_desc: "Eighteen acres of botanic gardens ten minutes from campus; the butterfly house is worth the stop.",
    old_town_name: "Old Town Fort Collins",
    old_town_desc: "The historic square that inspired Disneyland's Main Street - coffee, breweries, and live music most nights.",
    day_trips_heading: "Day trips",
    mountain_park_name: "Rocky Mountain National Park",
    mountain_park_desc: "An hour west through Estes Park; Trail Ridge Road usually opens for the season right around graduation.",
    reservoir_name: "Horsetooth Reservoir",
    reservoir_desc: "Fifteen minutes from campus - swimming, paddleboards, and the short hike up to the tooth itself.",
    canyon_name: "Poudre Canyon",
    canyon_desc: "Colorado's only designated wild and scenic river; the canyon drive alone is worth an afternoon.",
    campus_heading: "Campus tour",
    campus_desc: "Maya will walk anyone who's interested around campus Friday morning before the first ceremony.",
};

/// Spanish content table
static ES: Strings = Strings {
    lang_toggle: "English",
    nav_home: "Inicio",
    nav_schedule: "Programa",
    nav_travel: "Viaje",
    nav_activities: "Actividades",
    location_label: "Lugar",
    days_to_go: "días para la ceremonia",
    hint_navigate: "1-4/←→ páginas",
    hint_language: "l idioma",
    hint_quit: "q salir",

    intro_title: "GENERACIÓN 2026",
    intro_caption: "¡Felicidades, Maya!",

    invitation_line: "Estás invitado a celebrar",
    event_title: "El fin de semana de graduación de Maya",
    event_dates: "15 y 16 de mayo de 2026",
    venue: "Colorado State University",
    venue_city: "Fort Collins, Colorado",

    schedule_title: "Programa del fin de semana",
    friday_heading: "Viernes 15 de mayo",
    saturday_heading: "Sábado 16 de mayo",
    dept_ceremony_one: "Ceremonia del departamento de Estudios Étnicos",
    ceremony_tent: "Carpa de ceremonias, jardín oeste",
    family_dinner: "Cena familiar en Old Town",
    dept_ceremony_two: "Ceremonia del departamento de Ciencias de la Computación",
    arena: "Moby Arena",
    commencement: "Ceremonia general de la universidad",
    stadium: "Canvas Stadium",
    cookout_note: "Después habrá parrillada en el patio del Airbnb familiar - todos están invitados.",
    wear_heading: "Qué ponerse",
    wear_desc: "Ropa casual elegante sirve para todo: las ceremonias son al aire libre o en la arena, y nada es formal.",
    weather_note: "En mayo el clima cambia entre sol y nieve - trae algo abrigado para las noches.",

    travel_title: "Cómo llegar",
    flying_heading: "En avión",
    airport_info: "El aeropuerto internacional de Denver (DEN) es el más cercano, a unos 75 minutos al sur de Fort Collins en auto o shuttle.",
    flights_label: "Vuelos",
    flight_range: "Los viajes redondos desde las ciudades principales cuestan $150–$350 si se reservan con un mes de anticipación.",
    important_label: "Importante",
    baggage_note: "Frontier y las demás aerolíneas económicas cobran cada maleta - revisa las reglas de la tarifa antes de reservar.",
    stay_heading: "Dónde alojarse",
    hotel_range: "Los hoteles cerca del campus cuestan $120–$180 por noche durante el fin de semana de graduación.",
    family_airbnb: "Airbnb familiar",
    limited_rooms: "Todavía quedan algunos cuartos - pregúntale a Maya si quieres uno.",
    recommended_hotels: "Hoteles recomendados",
    hotel_note: "Reserva pronto; todo lo que queda cerca del campus se agota para la graduación.",
    arrival_heading: "Llegada y salida",
    thursday_label: "Jueves 14 de mayo",
    thursday_desc: "La mayoría de la familia llega el jueves por la noche y se reúne en el Airbnb para una cena tardía.",
    sunday_label: "Domingo 17 de mayo",
    sunday_desc: "La salida es a las 10 AM, con un brunch de despedida antes de ir al aeropuerto.",

    activities_title: "Durante tu visita",
    attractions_heading: "Atracciones locales",
    gardens_name: "Gardens on Spring Creek",
    gardens_desc: "Siete hectáreas de jardines botánicos a diez minutos del campus; la casa de mariposas vale la visita.",
    old_town_name: "Old Town Fort Collins",
    old_town_desc: "La plaza histórica que inspiró la calle principal de Disneylandia - café, cervecerías y música en vivo casi todas las noches.",
    day_trips_heading: "Excursiones de un día",
    mountain_park_name: "Parque Nacional de las Montañas Rocosas",
    mountain_park_desc: "A una hora hacia el oeste por Estes Park; la carretera Trail Ridge suele abrir justo en las fechas de la graduación.",
    reservoir_name: "Embalse de Horsetooth",
    reservoir_desc: "A quince minutos del campus - natación, tablas de remo y la caminata corta hasta el diente de piedra.",
    canyon_name: "Cañón del Poudre",
    canyon_desc: "El único río de Colorado designado salvaje y escénico; solo el recorrido por el cañón vale una tarde.",
    campus_heading: "Recorrido por el campus",
    campus_desc: "Maya llevará a quien quiera a conocer el campus el viernes por la mañana, antes de la primera ceremonia.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_locale_has_its_own_table() {
        let en = strings(Locale::English);
        let es = strings(Locale::Spanish);
        assert_eq!(en.nav_home, "Home");
        assert_eq!(es.nav_home, "Inicio");
        // The toggle label always names the other language.
        assert_eq!(en.lang_toggle, "Español");
        assert_eq!(es.lang_toggle, "English");
    }

    #[test]
    fn nav_labels_cover_every_page() {
        for locale in [Locale::English, Locale::Spanish] {
            let t = strings(locale);
            for page in Page::ALL {
                assert!(!t.nav_label(page).is_empty());
            }
        }
    }

    #[test]
    fn ceremony_date_is_valid() {
        let date = ceremony_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 5, 16).unwrap());
    }
}
