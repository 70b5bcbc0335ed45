use async_trait::async_trait;
use std::sync::Arc;

use superheroes_core::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, queries::GetSuperHeroByName},
    repository::SuperHeroesRepository,
};

pub struct GetSuperHeroByNameHandler {}

impl GetSuperHeroByNameHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetSuperHeroByName> for GetSuperHeroByNameHandler {
    async fn handle(
        &self,
        query: GetSuperHeroByName,
        repository: &Arc<dyn SuperHeroesRepository>,
    ) -> Result<<GetSuperHeroByName as Query>::Output, ApplicationError> {
        tracing::debug!(name = %query.name, "Fetching super hero");
        repository.get_by_name(&query.name).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use superheroes_core::DbError;
    use superheroes_model::test_utils::super_heroes_factory;

    use super::*;
    use crate::test_utils::tests::MockSuperHeroesRepository;

    #[tokio::test]
    async fn test_get_super_hero_by_name_success() {
        let repository: Arc<dyn SuperHeroesRepository> = Arc::new(
            MockSuperHeroesRepository::with_super_heroes(super_heroes_factory(5, true)),
        );
        let handler = GetSuperHeroByNameHandler::new();

        let query = GetSuperHeroByName {
            name: "SuperHero - 3".to_string(),
        };
        let hero = handler.handle(query, &repository).await.unwrap();

        assert_eq!(hero.name(), "SuperHero - 3");
        assert_eq!(hero.description(), "Description Super Hero - 3");
        assert!(hero.is_avenger());
    }

    #[tokio::test]
    async fn test_get_super_hero_by_name_not_found() {
        let repository: Arc<dyn SuperHeroesRepository> =
            Arc::new(MockSuperHeroesRepository::new());
        let handler = GetSuperHeroByNameHandler::new();

        let query = GetSuperHeroByName {
            name: "Spider-pig".to_string(),
        };
        let result = handler.handle(query, &repository).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Db(DbError::SuperHeroNotFound(ref name))) if name == "Spider-pig"
        ));
    }
}
