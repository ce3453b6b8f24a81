//! Fixed shipping geography for generated orders.
//!
//! Orders ship within the US only, to one of five states, each with a
//! fixed three-city list. The generator picks a state uniformly and then
//! a city uniformly within that state.

/// A US state and its shippable cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCities {
    /// Two-letter state code.
    pub state: &'static str,
    pub cities: [&'static str; 3],
}

/// All shippable states.
pub const STATES: [StateCities; 5] = [
    StateCities {
        state: "CA",
        cities: ["San Francisco", "Los Angeles", "San Diego"],
    },
    StateCities {
        state: "NY",
        cities: ["New York", "Albany", "Buffalo"],
    },
    StateCities {
        state: "TX",
        cities: ["Houston", "Dallas", "Austin"],
    },
    StateCities {
        state: "FL",
        cities: ["Miami", "Tampa", "Orlando"],
    },
    StateCities {
        state: "IL",
        cities: ["Chicago", "Springfield", "Rockford"],
    },
];

/// Look up the city list for a state code.
pub fn cities_of(state: &str) -> Option<&'static [&'static str; 3]> {
    STATES
        .iter()
        .find(|entry| entry.state == state)
        .map(|entry| &entry.cities)
}
