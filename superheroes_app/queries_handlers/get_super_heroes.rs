use async_trait::async_trait;
use std::sync::Arc;

use superheroes_core::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, queries::GetSuperHeroes},
    repository::SuperHeroesRepository,
};

pub struct GetSuperHeroesHandler {}

impl GetSuperHeroesHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetSuperHeroes> for GetSuperHeroesHandler {
    async fn handle(
        &self,
        _query: GetSuperHeroes,
        repository: &Arc<dyn SuperHeroesRepository>,
    ) -> Result<<GetSuperHeroes as Query>::Output, ApplicationError> {
        let super_heroes = repository.get_all().await?;
        tracing::debug!(count = super_heroes.len(), "Fetched super heroes");
        Ok(super_heroes)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use superheroes_model::test_utils::super_heroes_factory;

    use super::*;
    use crate::test_utils::tests::MockSuperHeroesRepository;

    #[tokio::test]
    async fn test_get_super_heroes_keeps_repository_order() {
        let heroes = super_heroes_factory(3, false);
        let repository: Arc<dyn SuperHeroesRepository> =
            Arc::new(MockSuperHeroesRepository::with_super_heroes(heroes.clone()));
        let handler = GetSuperHeroesHandler::new();

        let result = handler
            .handle(GetSuperHeroes, &repository)
            .await
            .unwrap();

        assert_eq!(result, heroes);
    }

    #[tokio::test]
    async fn test_get_super_heroes_propagates_repository_errors() {
        let repository: Arc<dyn SuperHeroesRepository> =
            Arc::new(MockSuperHeroesRepository::unavailable());
        let handler = GetSuperHeroesHandler::new();

        let result = handler.handle(GetSuperHeroes, &repository).await;

        assert!(matches!(result, Err(ApplicationError::Infrastructure(_))));
    }
}
