use std::{collections::HashMap, time::Duration};

use superheroes_app::repository::SuperHeroesRepository;
use superheroes_core::{ApplicationError, DbError, Result};
use superheroes_model::models::super_hero::SuperHero;

/// Read-only repository keeping heroes in insertion order.
///
/// An optional delay is applied before answering each call, to mimic a slow
/// backend.
#[derive(Debug, Clone, Default)]
pub struct InMemorySuperHeroesRepository {
    super_heroes: Vec<SuperHero>,
    by_name: HashMap<String, usize>,
    delay: Option<Duration>,
}

impl InMemorySuperHeroesRepository {
    /// Fails with `DbError::DuplicateSuperHero` if two heroes share a name.
    pub fn new(super_heroes: Vec<SuperHero>) -> Result<Self, ApplicationError> {
        let mut by_name = HashMap::with_capacity(super_heroes.len());
        for (idx, super_hero) in super_heroes.iter().enumerate() {
            if by_name.insert(super_hero.name().to_string(), idx).is_some() {
                return Err(DbError::DuplicateSuperHero(super_hero.name().to_string()).into());
            }
        }

        Ok(Self {
            super_heroes,
            by_name,
            delay: None,
        })
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay = (delay_ms > 0).then(|| Duration::from_millis(delay_ms));
        self
    }

    pub fn len(&self) -> usize {
        self.super_heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.super_heroes.is_empty()
    }

    async fn wait_a_bit(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait::async_trait]
impl SuperHeroesRepository for InMemorySuperHeroesRepository {
    async fn get_all(&self) -> Result<Vec<SuperHero>, ApplicationError> {
        self.wait_a_bit().await;
        Ok(self.super_heroes.clone())
    }

    async fn get_by_name(&self, name: &str) -> Result<SuperHero, ApplicationError> {
        self.wait_a_bit().await;
        self.by_name
            .get(name)
            .map(|&idx| self.super_heroes[idx].clone())
            .ok_or_else(|| ApplicationError::Db(DbError::SuperHeroNotFound(name.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use superheroes_model::test_utils::{
        SuperHeroFactoryOptions, super_hero_factory, super_heroes_factory,
    };

    use super::*;

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order() {
        let heroes = super_heroes_factory(10, false);
        let repo = InMemorySuperHeroesRepository::new(heroes.clone()).unwrap();

        let all = repo.get_all().await.unwrap();

        assert_eq!(all, heroes);
    }

    #[tokio::test]
    async fn test_get_by_name_is_exact() {
        let repo = InMemorySuperHeroesRepository::new(super_heroes_factory(3, true)).unwrap();

        let hero = repo.get_by_name("SuperHero - 1").await.unwrap();
        assert_eq!(hero.description(), "Description Super Hero - 1");

        let miss = repo.get_by_name("superhero - 1").await;
        assert!(matches!(
            miss,
            Err(ApplicationError::Db(DbError::SuperHeroNotFound(_)))
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let hero = super_hero_factory(SuperHeroFactoryOptions {
            name: Some("Hulk"),
            ..Default::default()
        });

        let result = InMemorySuperHeroesRepository::new(vec![hero.clone(), hero]);

        assert!(matches!(
            result,
            Err(ApplicationError::Db(DbError::DuplicateSuperHero(ref name))) if name == "Hulk"
        ));
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let repo = InMemorySuperHeroesRepository::new(super_heroes_factory(1, false))
            .unwrap()
            .with_delay(20);
        let started = tokio::time::Instant::now();

        repo.get_by_name("SuperHero - 0").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
