use std::sync::Arc;

use superheroes_core::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler},
    repository::SuperHeroesRepository,
};

/// AppBus (Mediator)
/// The single entry point presenters use to reach the repository.
/// It holds no logic of its own: it hands each query to its handler together
/// with the injected repository.
pub struct AppBus {
    repository: Arc<dyn SuperHeroesRepository>,
}

impl AppBus {
    pub fn new(repository: Arc<dyn SuperHeroesRepository>) -> Self {
        Self { repository }
    }

    /// Executes a query.
    /// A query reads system state and returns data; it never modifies it.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        handler.handle(query, &self.repository).await
    }
}
