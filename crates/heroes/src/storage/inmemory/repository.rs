//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use heroes_core::hero::Hero;
use heroes_core::storage::{HeroRepository, HeroStream, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    heroes: Arc<RwLock<HashMap<String, Hero>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HeroRepository for InMemoryRepository {
    async fn get_hero(&self, id: &str) -> Result<Option<Hero>> {
        let heroes = self.heroes.read().await;
        Ok(heroes.get(id).cloned())
    }

    fn scan_heroes(&self) -> HeroStream {
        let heroes = Arc::clone(&self.heroes);

        // Snapshot taken on first poll, like a scan started at that moment.
        Box::pin(async_stream::stream! {
            let snapshot: Vec<Hero> = heroes.read().await.values().cloned().collect();
            for hero in snapshot {
                yield Ok(hero);
            }
        })
    }

    async fn put_hero(&self, hero: &Hero) -> Result<()> {
        let mut heroes = self.heroes.write().await;
        heroes.insert(hero.id.clone(), hero.clone());
        Ok(())
    }

    async fn update_hero(&self, hero: &Hero) -> Result<Option<Hero>> {
        let mut heroes = self.heroes.write().await;
        match heroes.get_mut(&hero.id) {
            Some(stored) => {
                *stored = hero.clone();
                Ok(Some(hero.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_hero(&self, id: &str) -> Result<Option<Hero>> {
        let mut heroes = self.heroes.write().await;
        Ok(heroes.remove(id))
    }

    async fn reset_table(&self) -> Result<()> {
        self.heroes.write().await.clear();
        Ok(())
    }
}
