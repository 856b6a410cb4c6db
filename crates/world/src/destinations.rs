//! Destination lookup table: free-text names mapped to world coordinates.

use bevy::prelude::*;

/// Known destinations, keyed by lowercase name. Coordinates are world
/// (x, z) pairs along the corridor.
pub const DESTINATIONS: &[(&str, Vec2)] = &[
    ("about me", Vec2::new(50.0, 0.0)),
    ("projects", Vec2::new(150.0, 0.0)),
    ("contact", Vec2::new(250.0, 0.0)),
];

/// Resolve a user-typed destination name. Matching is case-insensitive and
/// ignores surrounding whitespace.
pub fn lookup(name: &str) -> Option<Vec2> {
    let needle = name.trim().to_lowercase();
    DESTINATIONS
        .iter()
        .find(|(key, _)| *key == needle)
        .map(|(_, coord)| *coord)
}

/// The currently selected destination, if any. Stored for future
/// consumers; nothing steers toward it automatically.
#[derive(Resource, Default)]
pub struct TargetDestination(pub Option<Vec2>);

/// Sent when a lookup succeeds; rendering places the marker beacon.
#[derive(Event)]
pub struct DestinationChosen(pub Vec2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        assert_eq!(lookup("about me"), Some(Vec2::new(50.0, 0.0)));
        assert_eq!(lookup("  Projects "), Some(Vec2::new(150.0, 0.0)));
        assert_eq!(lookup("CONTACT"), Some(Vec2::new(250.0, 0.0)));
    }

    #[test]
    fn unknown_destination_misses() {
        assert_eq!(lookup("airport"), None);
        assert_eq!(lookup(""), None);
    }
}
