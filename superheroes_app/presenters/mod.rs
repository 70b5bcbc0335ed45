mod super_hero_detail_presenter;
mod super_heroes_presenter;

pub use super_hero_detail_presenter::{DetailState, SuperHeroDetailPresenter};
pub use super_heroes_presenter::{ListState, SuperHeroesPresenter};
