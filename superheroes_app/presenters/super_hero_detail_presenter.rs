use std::sync::Arc;

use superheroes_core::{ApplicationError, DbError, Result};
use superheroes_model::models::super_hero::SuperHero;

use crate::{
    app_bus::AppBus, cqrs::queries::GetSuperHeroByName,
    queries_handlers::GetSuperHeroByNameHandler, views::SuperHeroDetailView,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Idle,
    Loaded(SuperHero),
    /// No hero matched the requested name.
    NotFound(String),
}

pub struct SuperHeroDetailPresenter {
    app_bus: Arc<AppBus>,
    view: Arc<dyn SuperHeroDetailView>,
    state: DetailState,
}

impl SuperHeroDetailPresenter {
    pub fn new(app_bus: Arc<AppBus>, view: Arc<dyn SuperHeroDetailView>) -> Self {
        Self {
            app_bus,
            view,
            state: DetailState::Idle,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Resolves `name` and renders the matching hero.
    /// A miss is rendered as not found; any other repository error is returned.
    pub async fn load(&mut self, name: &str) -> Result<&DetailState, ApplicationError> {
        self.view.show_loading();
        let result = self
            .app_bus
            .query(
                GetSuperHeroByName {
                    name: name.to_string(),
                },
                GetSuperHeroByNameHandler::new(),
            )
            .await;
        self.view.hide_loading();

        match result {
            Ok(super_hero) => {
                tracing::info!(name = %super_hero.name(), "Super hero detail loaded");
                self.view.show_super_hero(&super_hero);
                self.state = DetailState::Loaded(super_hero);
            }
            Err(ApplicationError::Db(DbError::SuperHeroNotFound(missing))) => {
                tracing::warn!(name = %missing, "Super hero not found");
                self.view.show_not_found(&missing);
                self.state = DetailState::NotFound(missing);
            }
            Err(e) => return Err(e),
        }

        Ok(&self.state)
    }
}
