mod get_super_hero_by_name;
mod get_super_heroes;

pub use get_super_hero_by_name::GetSuperHeroByNameHandler;
pub use get_super_heroes::GetSuperHeroesHandler;
