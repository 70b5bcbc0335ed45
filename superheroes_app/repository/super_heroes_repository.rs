use superheroes_core::{ApplicationError, Result};
use superheroes_model::models::super_hero::SuperHero;

#[async_trait::async_trait]
pub trait SuperHeroesRepository: Send + Sync {
    /// Returns every super hero, ordering is up to the repository.
    async fn get_all(&self) -> Result<Vec<SuperHero>, ApplicationError>;

    /// Returns the super hero with the exact given name.
    /// Fails with `DbError::SuperHeroNotFound` on a miss.
    async fn get_by_name(&self, name: &str) -> Result<SuperHero, ApplicationError>;
}
