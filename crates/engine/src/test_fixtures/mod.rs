//! Test fixtures loader for JSON fixture files and common test helpers.
//!
//! Fixtures live under `test_data/` in the crate directory and use the same
//! document shape the host exports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{actors, catalogue};
//!
//! #[test]
//! fn agent_can_take_brawler() {
//!     let agent = actors::field_agent();
//!     let catalogue = catalogue();
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;

use laundry_domain::RulesetCatalogue;

// =============================================================================
// Fixture Loading
// =============================================================================

/// Absolute path of a file under `test_data/`.
pub fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = fixture_path(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// The sample ruleset catalogue (12 skills, 9 talents).
pub fn catalogue() -> RulesetCatalogue {
    load_fixture("catalogue.json")
}

// =============================================================================
// Actor Fixtures
// =============================================================================

/// Pre-built actor fixtures for testing.
pub mod actors {
    use super::*;
    use laundry_domain::ActorRecord;

    /// Experienced field agent.
    ///
    /// - Body 2, Mind 3 (stored as a string), Spirit 1
    /// - Close Combat 2/0, Ranged 1/1, Stealth 1/-, Occult 2/0, Bureaucracy 1/-
    /// - Licence talent
    /// - Service Pistol (ranged), Extendable Baton (crushing), Stab Vest
    pub fn field_agent() -> ActorRecord {
        load_fixture("actors/field_agent.json")
    }

    /// Fresh recruit with desk skills and a disguise kit.
    ///
    /// - Body 1, Mind 2, Spirit 2
    /// - Academics 1/0, Computers 2/1
    pub fn new_recruit() -> ActorRecord {
        load_fixture("actors/new_recruit.json")
    }
}
