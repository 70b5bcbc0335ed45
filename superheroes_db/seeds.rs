use std::{fs, path::Path};

use superheroes_app::config::Config;
use superheroes_core::{ApplicationError, DbError, Result};
use superheroes_model::models::super_hero::SuperHero;

use crate::InMemorySuperHeroesRepository;

const DEFAULT_SEEDS: &str = include_str!("seeds/super_heroes.json");

/// Heroes shipped with the application.
pub fn default_super_heroes() -> Result<Vec<SuperHero>, ApplicationError> {
    Ok(serde_json::from_str(DEFAULT_SEEDS)?)
}

/// Reads a JSON array of heroes from `path`.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<SuperHero>, ApplicationError> {
    let path = path.as_ref();
    let seed_error = |reason: String| DbError::SeedFile {
        path: path.display().to_string(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| seed_error(e.to_string()))?;
    let super_heroes = serde_json::from_str(&content).map_err(|e| seed_error(e.to_string()))?;
    Ok(super_heroes)
}

/// Builds the repository described by `config`.
pub fn bootstrap_repository(
    config: &Config,
) -> Result<InMemorySuperHeroesRepository, ApplicationError> {
    let super_heroes = match &config.seed_file {
        Some(path) => load_seed_file(path)?,
        None => default_super_heroes()?,
    };

    let repository =
        InMemorySuperHeroesRepository::new(super_heroes)?.with_delay(config.loading_delay_ms);
    tracing::info!(
        count = repository.len(),
        seed_file = ?config.seed_file,
        "Super heroes repository bootstrapped"
    );

    Ok(repository)
}
