//! Terminal rendering of the list and detail screens.

use superheroes_app::views::{SuperHeroDetailView, SuperHeroesView};
use superheroes_model::models::super_hero::SuperHero;

pub const EMPTY_CASE: &str = "¯\\_(ツ)_/¯";
const AVENGER_BADGE: &str = "[A]";

pub fn format_super_hero_row(index: usize, super_hero: &SuperHero) -> String {
    let badge = if super_hero.is_avenger() {
        AVENGER_BADGE
    } else {
        "   "
    };
    format!("{index:>3}. {badge} {}", super_hero.name())
}

pub fn format_super_hero_detail(super_hero: &SuperHero) -> String {
    let mut title = super_hero.name().to_string();
    if super_hero.is_avenger() {
        title.push(' ');
        title.push_str(AVENGER_BADGE);
    }
    format!(
        "{title}\n{}\n{}\n\n{}",
        "=".repeat(super_hero.name().chars().count()),
        super_hero.photo(),
        super_hero.description()
    )
}

pub struct ConsoleSuperHeroesView {}

impl ConsoleSuperHeroesView {
    pub fn new() -> Self {
        Self {}
    }
}

impl SuperHeroesView for ConsoleSuperHeroesView {
    fn show_loading(&self) {
        println!("Loading...");
    }

    fn hide_loading(&self) {}

    fn show_empty_case(&self) {
        println!("{EMPTY_CASE}");
    }

    fn hide_empty_case(&self) {}

    fn show_super_heroes(&self, super_heroes: &[SuperHero]) {
        for (index, super_hero) in super_heroes.iter().enumerate() {
            println!("{}", format_super_hero_row(index, super_hero));
        }
    }
}

pub struct ConsoleSuperHeroDetailView {}

impl ConsoleSuperHeroDetailView {
    pub fn new() -> Self {
        Self {}
    }
}

impl SuperHeroDetailView for ConsoleSuperHeroDetailView {
    fn show_loading(&self) {
        println!("Loading...");
    }

    fn hide_loading(&self) {}

    fn show_super_hero(&self, super_hero: &SuperHero) {
        println!("\n{}", format_super_hero_detail(super_hero));
    }

    fn show_not_found(&self, name: &str) {
        println!("\nNo super hero named '{name}'");
    }
}
