use thiserror::Error;

/// Errors for repository stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Super hero with name '{0}' not found")]
    SuperHeroNotFound(String),

    #[error("Super hero with name '{0}' is already stored")]
    DuplicateSuperHero(String),

    #[error("Unable to read seed file {path}: {reason}")]
    SeedFile { path: String, reason: String },
}
