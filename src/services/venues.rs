//! Venue → coordinate lookup.
//!
//! Fixture feeds rarely carry stadium coordinates, so weather lookups run
//! against a static table keyed by venue name (in practice the home team's
//! name, which is what the feed falls back to). The table is injected into
//! `VenueDirectory` so tests can supply a small one; production uses
//! `with_default_table`.

use std::collections::HashMap;
use std::sync::Arc;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Sentinel for venues the directory does not know.
    pub const UNRESOLVED: Coordinate = Coordinate { lat: 0.0, lon: 0.0 };

    /// Whether this coordinate points at a real venue.
    pub fn is_resolved(&self) -> bool {
        *self != Self::UNRESOLVED
    }
}

/// Lookup table from venue name to coordinates.
///
/// Cheap to clone; the table is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct VenueDirectory {
    table: Arc<HashMap<String, Coordinate>>,
}

impl VenueDirectory {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Coordinate)>,
    {
        Self {
            table: Arc::new(entries.into_iter().collect()),
        }
    }

    /// Directory covering the stadiums of the five supported competitions.
    pub fn with_default_table() -> Self {
        Self::new(
            DEFAULT_VENUE_TABLE
                .iter()
                .map(|&(name, lat, lon)| (name.to_string(), Coordinate { lat, lon })),
        )
    }

    /// Exact-name lookup. Unknown venues return the unresolved sentinel;
    /// callers degrade weather for those fixtures instead of failing.
    pub fn resolve(&self, venue: &str) -> Coordinate {
        match self.table.get(venue) {
            Some(&coord) => coord,
            None => {
                tracing::warn!("No coordinates found for venue: {}", venue);
                Coordinate::UNRESOLVED
            }
        }
    }
}

/// Stadium coordinates keyed by the home team's canonical name.
const DEFAULT_VENUE_TABLE: &[(&str, f64, f64)] = &[
    // Premier League
    ("Liverpool FC", 53.4308, -2.9606),
    ("Arsenal FC", 51.555, -0.108),
    ("Nottingham Forest FC", 52.948, -1.1495),
    ("Chelsea FC", 51.4816, -0.1910),
    ("Manchester City FC", 53.483, -2.2005),
    ("Newcastle United FC", 54.9714, -1.6214),
    ("Brighton & Hove Albion FC", 50.828, -0.173),
    ("Fulham FC", 51.4762, -0.211),
    ("Aston Villa FC", 52.5091, -1.8834),
    ("AFC Bournemouth", 50.7356, -1.838),
    ("Brentford FC", 51.4857, -0.3084),
    ("Crystal Palace FC", 51.3981, -0.0926),
    ("Manchester United FC", 53.4631, -2.2913),
    ("Tottenham Hotspur FC", 51.6044, -0.0652),
    ("Everton FC", 53.4083, -2.9911),
    ("West Ham United FC", 51.538, 0.0086),
    ("Wolverhampton Wanderers FC", 52.586, -2.125),
    ("Ipswich Town FC", 52.058, 1.150),
    ("Leicester City FC", 52.6206, -1.1421),
    ("Southampton FC", 50.9051, -1.3917),
    // Bundesliga
    ("FC Augsburg", 48.3245, 10.8998),
    ("Bayer 04 Leverkusen", 51.0386, 7.0029),
    ("Bayern Munich", 48.2188, 11.6247),
    ("VfL Bochum 1848", 51.4878, 7.2227),
    ("Borussia Dortmund", 51.4926, 7.4519),
    ("Eintracht Frankfurt", 50.0686, 8.6455),
    ("SC Freiburg", 48.0225, 7.8322),
    ("1. FC Heidenheim 1846", 48.6767, 10.1544),
    ("TSG 1899 Hoffenheim", 49.2359, 8.8859),
    ("1. FC Köln", 50.9344, 6.8769),
    ("RB Leipzig", 51.3465, 12.3569),
    ("1. FSV Mainz 05", 49.9725, 8.2239),
    ("Borussia Mönchengladbach", 51.1756, 6.3947),
    ("VfB Stuttgart", 48.7936, 9.1847),
    ("1. FC Union Berlin", 52.4556, 13.5264),
    ("VfL Wolfsburg", 52.4306, 10.7975),
    ("SV Werder Bremen", 53.0667, 8.8375),
    ("FC St. Pauli 1910", 53.5619, 9.9683),
    // Serie A
    ("AC Milan", 45.4781, 9.1240),
    ("Inter Milan", 45.4781, 9.1240), // Shares San Siro with AC Milan
    ("Juventus FC", 45.1096, 7.6413),
    ("AS Roma", 41.9340, 12.4547),
    ("SS Lazio", 41.9340, 12.4547), // Shares Stadio Olimpico with Roma
    ("Atalanta BC", 45.7098, 9.6773),
    ("Bologna FC 1909", 44.4939, 11.3070),
    ("Cagliari Calcio", 39.1996, 9.1347),
    ("Empoli FC", 43.7167, 10.4000),
    ("ACF Fiorentina", 43.7808, 11.2823),
    ("Genoa CFC", 44.4154, 8.9656),
    ("Hellas Verona FC", 45.4386, 10.9928),
    ("US Lecce", 40.3536, 18.1969),
    ("AC Monza", 45.6236, 9.2744),
    ("SSC Napoli", 40.8279, 14.1931),
    ("Parma Calcio 1913", 44.7969, 10.3276),
    ("US Salernitana 1919", 40.6824, 14.7681),
    ("US Sassuolo Calcio", 44.7249, 10.8853),
    ("Torino FC", 45.0436, 7.6497),
    ("Udinese Calcio", 46.0783, 13.2044),
    ("Como 1907", 45.8090, 9.0854),
    ("Venezia FC", 45.4843, 12.3508),
    // La Liga
    ("FC Barcelona", 41.3809, 2.1228),
    ("Real Madrid CF", 40.4531, -3.6883),
    ("Atletico Madrid", 40.4363, -3.5997),
    ("Athletic Club", 43.2642, -2.9495),
    ("Real Betis Balompié", 37.3850, -5.9709),
    ("RC Celta de Vigo", 42.2118, -8.7391),
    ("Deportivo Alavés", 42.8499, -2.6723),
    ("RCD Espanyol de Barcelona", 41.3809, 2.1228), // Shares with Barcelona
    ("Getafe CF", 40.3249, -3.7249),
    ("Girona FC", 41.9609, 2.8244),
    ("UD Las Palmas", 28.1248, -15.4300),
    ("RCD Mallorca", 39.6206, 2.6888),
    ("CA Osasuna", 42.7889, -1.6369),
    ("Rayo Vallecano de Madrid", 40.3909, -3.6569),
    ("Real Sociedad de Fútbol", 43.3014, -1.9747),
    ("Sevilla FC", 37.3841, -5.9706),
    ("Valencia CF", 39.4747, -0.3583),
    ("Villarreal CF", 39.9467, -0.1044),
    ("CD Leganés", 40.3269, -3.7686),
    ("Real Valladolid CF", 41.6428, -4.7539),
    // Ligue 1
    ("Paris Saint-Germain FC", 48.8414, 2.2530),
    ("Olympique de Marseille", 43.2699, 5.3959),
    ("Olympique Lyonnais", 45.7652, 4.9822),
    ("AS Monaco FC", 43.7278, 7.4181),
    ("OGC Nice", 43.7031, 7.1927),
    ("Lille OSC", 50.6118, 3.1316),
    ("Stade Rennais FC 1901", 48.1056, -1.6733),
    ("RC Strasbourg Alsace", 48.5596, 7.7536),
    ("FC Nantes", 47.2563, -1.5251),
    ("Montpellier HSC", 43.6216, 3.8134),
    ("Stade Brestois 29", 48.3904, -4.4861),
    ("Stade de Reims", 49.2554, 4.0286),
    ("Angers SCO", 47.4745, -0.5540),
    ("Toulouse FC", 43.5836, 1.4342),
    ("AJ Auxerre", 47.7986, 3.5738),
    ("Clermont Foot 63", 45.7875, 3.1634),
    ("Le Havre AC", 49.4939, 0.1089),
    ("AS Saint-Étienne", 45.4605, 4.3875),
];
