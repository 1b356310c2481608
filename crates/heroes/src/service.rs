//! Hero application service.
//!
//! Sits between the HTTP handlers and the repository. Assigns identifiers on
//! creation and otherwise forwards operations unchanged.

use std::sync::Arc;

use uuid::Uuid;

use heroes_core::hero::{Hero, HeroRequest};
use heroes_core::storage::{HeroRepository, HeroStream, Result};

/// Hero operations over an injected repository.
#[derive(Clone)]
pub struct HeroService {
    repo: Arc<dyn HeroRepository>,
}

impl HeroService {
    pub fn new(repo: Arc<dyn HeroRepository>) -> Self {
        Self { repo }
    }

    /// Streams every stored hero.
    pub fn list_heroes(&self) -> HeroStream {
        self.repo.scan_heroes()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Hero>> {
        self.repo.get_hero(id).await
    }

    /// Creates a hero under a freshly generated identifier.
    ///
    /// Returns the record as built here; it is not read back from storage.
    pub async fn create(&self, request: HeroRequest) -> Result<Hero> {
        let hero = request.into_hero(Uuid::new_v4().to_string());
        self.repo.put_hero(&hero).await?;
        Ok(hero)
    }

    /// Creates the hero under `id`, overwriting any existing record.
    pub async fn force_create(&self, id: &str, request: HeroRequest) -> Result<Hero> {
        let hero = request.into_hero(id);
        self.repo.put_hero(&hero).await?;
        Ok(hero)
    }

    /// Replaces the hero stored under `id`.
    ///
    /// Returns `None` without writing when no hero exists under `id`.
    pub async fn update(&self, id: &str, request: HeroRequest) -> Result<Option<Hero>> {
        let hero = request.into_hero(id);
        self.repo.update_hero(&hero).await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<Option<Hero>> {
        self.repo.delete_hero(id).await
    }
}
