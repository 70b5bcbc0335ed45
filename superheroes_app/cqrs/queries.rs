use superheroes_model::models::super_hero::SuperHero;

use crate::cqrs::Query;

/// Fetch every super hero, in repository order.
pub struct GetSuperHeroes;

impl Query for GetSuperHeroes {
    type Output = Vec<SuperHero>;
}

/// Fetch a single super hero by its name.
pub struct GetSuperHeroByName {
    pub name: String,
}

impl Query for GetSuperHeroByName {
    type Output = SuperHero;
}
