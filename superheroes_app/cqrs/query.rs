use async_trait::async_trait;
use std::sync::Arc;

use superheroes_core::ApplicationError;

use crate::repository::SuperHeroesRepository;

/// A marker trait for Query structs.
/// Queries are operations that read the state of the system.
pub trait Query: Send + Sync {
    /// The data type that this query will return.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Queries.
/// It receives the query and the repository to read data from.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        repository: &Arc<dyn SuperHeroesRepository>,
    ) -> Result<Q::Output, ApplicationError>;
}
