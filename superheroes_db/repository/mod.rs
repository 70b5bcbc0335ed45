mod super_heroes_repository;

pub use super_heroes_repository::InMemorySuperHeroesRepository;
