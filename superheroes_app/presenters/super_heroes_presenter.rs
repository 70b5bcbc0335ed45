use std::sync::Arc;

use superheroes_core::{AppError, ApplicationError, Result};
use superheroes_model::models::super_hero::SuperHero;

use crate::{
    app_bus::AppBus,
    cqrs::queries::GetSuperHeroes,
    navigation::{NavigationPayload, Navigator},
    queries_handlers::GetSuperHeroesHandler,
    views::SuperHeroesView,
};

/// What the list screen currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Empty,
    /// Heroes in the order the repository returned them. Never empty.
    Populated(Vec<SuperHero>),
}

impl ListState {
    pub fn super_heroes(&self) -> &[SuperHero] {
        match self {
            ListState::Empty => &[],
            ListState::Populated(super_heroes) => super_heroes,
        }
    }

    pub fn len(&self) -> usize {
        self.super_heroes().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListState::Empty)
    }
}

impl From<Vec<SuperHero>> for ListState {
    fn from(super_heroes: Vec<SuperHero>) -> Self {
        if super_heroes.is_empty() {
            ListState::Empty
        } else {
            ListState::Populated(super_heroes)
        }
    }
}

/// Drives the list screen: loads heroes into a `ListState` and turns item
/// taps into navigation requests.
pub struct SuperHeroesPresenter {
    app_bus: Arc<AppBus>,
    view: Arc<dyn SuperHeroesView>,
    navigator: Arc<dyn Navigator>,
    state: ListState,
}

impl SuperHeroesPresenter {
    pub fn new(
        app_bus: Arc<AppBus>,
        view: Arc<dyn SuperHeroesView>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            app_bus,
            view,
            navigator,
            state: ListState::Empty,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Fetches every hero and renders the resulting state.
    /// On error the previous state is kept and nothing is rendered.
    pub async fn load(&mut self) -> Result<&ListState, ApplicationError> {
        self.view.show_loading();
        let result = self
            .app_bus
            .query(GetSuperHeroes, GetSuperHeroesHandler::new())
            .await;
        self.view.hide_loading();

        self.state = ListState::from(result?);
        tracing::info!(count = self.state.len(), "Super heroes list loaded");
        self.render();

        Ok(&self.state)
    }

    /// Opens the detail screen for the hero at `index` of the rendered list.
    pub fn on_item_selected(&self, index: usize) -> Result<NavigationPayload, ApplicationError> {
        let super_heroes = self.state.super_heroes();
        let Some(super_hero) = super_heroes.get(index) else {
            tracing::warn!(index, len = super_heroes.len(), "Rejected selection");
            return Err(AppError::InvalidSelection {
                index,
                len: super_heroes.len(),
            }
            .into());
        };

        let payload = NavigationPayload::new(super_hero.name());
        self.navigator.open_super_hero_detail(payload.clone())?;
        tracing::debug!(name = %super_hero.name(), "Navigating to super hero detail");

        Ok(payload)
    }

    fn render(&self) {
        match &self.state {
            ListState::Empty => {
                self.view.show_empty_case();
                self.view.show_super_heroes(&[]);
            }
            ListState::Populated(super_heroes) => {
                self.view.hide_empty_case();
                self.view.show_super_heroes(super_heroes);
            }
        }
    }
}
