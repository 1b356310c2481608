use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::hero::Hero;

use super::Result;

/// Lazy sequence of every stored hero, in no particular order.
pub type HeroStream = BoxStream<'static, Result<Hero>>;

/// Repository for hero records keyed by `id`.
///
/// Absence is a normal result: lookups and deletes of unknown ids return
/// `Ok(None)` rather than an error.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Gets a hero by its ID.
    async fn get_hero(&self, id: &str) -> Result<Option<Hero>>;

    /// Streams every hero in the table.
    ///
    /// Each call starts a fresh scan. Records are fetched as the stream is
    /// polled, and dropping the stream stops the scan.
    fn scan_heroes(&self) -> HeroStream;

    /// Inserts a hero, replacing any record stored under the same ID.
    async fn put_hero(&self, hero: &Hero) -> Result<()>;

    /// Replaces an existing hero.
    ///
    /// Returns the written record, or `None` when no hero was stored under
    /// `hero.id` (nothing is written in that case).
    async fn update_hero(&self, hero: &Hero) -> Result<Option<Hero>>;

    /// Deletes a hero by its ID, returning the removed record if there was one.
    async fn delete_hero(&self, id: &str) -> Result<Option<Hero>>;

    /// Deletes the record stored under `hero.id`.
    async fn delete_hero_record(&self, hero: &Hero) -> Result<Option<Hero>> {
        self.delete_hero(&hero.id).await
    }

    /// Drops and recreates the backing table. Test fixtures only.
    async fn reset_table(&self) -> Result<()>;
}
