//! Rendering seams for the two screens.
//!
//! Presenters only talk to these traits, so a view can be a terminal, a test
//! double, or anything else able to draw heroes.

use superheroes_model::models::super_hero::SuperHero;

pub trait SuperHeroesView: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);
    /// Shows the placeholder displayed when there are no heroes.
    fn show_empty_case(&self);
    fn hide_empty_case(&self);
    /// Replaces the rendered items with `super_heroes`, in order.
    fn show_super_heroes(&self, super_heroes: &[SuperHero]);
}

pub trait SuperHeroDetailView: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);
    /// Draws title, photo, description and the avenger badge.
    fn show_super_hero(&self, super_hero: &SuperHero);
    fn show_not_found(&self, name: &str);
}
