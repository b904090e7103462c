//! Static catalogs and weather for the Stargazer simulation.
//!
//! This crate models the world the club lives in: the training activities
//! on offer, the trait pool, the ambient events that can strike any week,
//! the narrative mini-events of a contest's interactive phase, and the
//! weekly weather. Every catalog is plain data built from the template
//! shapes in `stargazer-types`; nothing here mutates a student.
//!
//! # Modules
//!
//! - [`events`] -- Ambient weekly events with independent probabilities.
//! - [`magnitude`] -- Shared gain, loss, and stress magnitudes.
//! - [`mini_events`] -- Contest interactive-phase mini-events.
//! - [`names`] -- Name pools for recruitment.
//! - [`training`] -- The weekly training catalog.
//! - [`traits`] -- The trait catalog.
//! - [`weather`] -- Weighted weekly weather with the cloud-bringer bonus.

pub mod events;
pub mod magnitude;
pub mod mini_events;
pub mod names;
pub mod training;
pub mod traits;
pub mod weather;

// Re-export primary items at crate root.
pub use events::ambient_events;
pub use mini_events::mini_event_catalog;
pub use names::random_name;
pub use training::training_catalog;
pub use traits::{find_trait, trait_catalog};
pub use weather::{WeatherTable, WeatherWeights};

/// Every catalog the simulation consumes, bundled for injection.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogs {
    /// Weekly training activities.
    pub training: Vec<stargazer_types::TrainingTemplate>,
    /// Trait templates.
    pub traits: Vec<stargazer_types::TraitTemplate>,
    /// Ambient weekly events, in evaluation order.
    pub events: Vec<stargazer_types::AmbientEvent>,
    /// Contest mini-events.
    pub mini_events: Vec<stargazer_types::MiniEvent>,
}

impl Catalogs {
    /// The built-in game content.
    pub fn standard() -> Self {
        Self {
            training: training_catalog(),
            traits: trait_catalog(),
            events: ambient_events(),
            mini_events: mini_event_catalog(),
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::standard()
    }
}
