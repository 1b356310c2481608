//! Request payloads for hero operations.

use serde::{Deserialize, Serialize};

use super::error::HeroError;
use super::operations::validate_hero_request;
use super::types::Hero;

/// Request payload for creating, force-creating or updating a hero.
///
/// Carries every field of [`Hero`] except the identifier, which comes either
/// from the service (create) or from the request path (force-create, update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroRequest {
    pub name: String,
    pub universe: String,
    pub films: i32,
}

impl HeroRequest {
    pub fn new(name: impl Into<String>, universe: impl Into<String>, films: i32) -> Self {
        Self {
            name: name.into(),
            universe: universe.into(),
            films,
        }
    }

    /// Checks the request against the hero field constraints.
    pub fn validate(&self) -> Result<(), HeroError> {
        validate_hero_request(self)
    }

    /// Builds the full record stored under `id`.
    ///
    /// Every non-key field is taken from the request, so writing the result
    /// replaces whatever was stored before.
    pub fn into_hero(self, id: impl Into<String>) -> Hero {
        Hero {
            id: id.into(),
            name: self.name,
            universe: self.universe,
            films: self.films,
        }
    }
}
