use std::sync::Arc;

use superheroes_app::{
    app_bus::AppBus,
    config::Config,
    navigation::ChannelNavigator,
    presenters::{SuperHeroDetailPresenter, SuperHeroesPresenter},
    router::Router,
    views::{SuperHeroDetailView, SuperHeroesView},
};
use superheroes_core::{ApplicationError, Result};
use superheroes_db::bootstrap_repository;

mod console;
mod logs;

use console::{ConsoleSuperHeroDetailView, ConsoleSuperHeroesView};
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    // Errors are returned rather than exiting, so the guard flushes the file log.
    let _log_guard = setup_logging();

    let result = match Config::from_env() {
        Ok(config) => {
            run(
                config,
                Arc::new(ConsoleSuperHeroesView::new()),
                Arc::new(ConsoleSuperHeroDetailView::new()),
            )
            .await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        tracing::error!("Super heroes run failed: {e}");
    }
    result
}

/// Lists the heroes, taps the configured one and shows its detail.
async fn run(
    config: Config,
    list_view: Arc<dyn SuperHeroesView>,
    detail_view: Arc<dyn SuperHeroDetailView>,
) -> Result<(), ApplicationError> {
    let app_bus = setup_app(&config)?;

    let (navigator, receiver) = ChannelNavigator::new();
    let mut list = SuperHeroesPresenter::new(app_bus.clone(), list_view, Arc::new(navigator));
    let mut router = Router::new(receiver, SuperHeroDetailPresenter::new(app_bus, detail_view));

    if list.load().await?.is_empty() {
        return Ok(());
    }

    list.on_item_selected(config.selected_index)?;
    // Dropping the list closes the navigation channel once the request is routed.
    drop(list);

    while router.route_next().await?.is_some() {}

    Ok(())
}

fn setup_app(config: &Config) -> Result<Arc<AppBus>, ApplicationError> {
    let repository = bootstrap_repository(config)?;
    Ok(Arc::new(AppBus::new(Arc::new(repository))))
}

#[cfg(test)]
mod tests {
    use superheroes_app::test_utils::tests::{MockSuperHeroDetailView, MockSuperHeroesView};
    use superheroes_core::AppError;

    use super::*;

    #[tokio::test]
    async fn test_run_shows_selected_super_hero() {
        let list_view = Arc::new(MockSuperHeroesView::new());
        let detail_view = Arc::new(MockSuperHeroDetailView::new());
        let config = Config {
            selected_index: 5,
            ..Default::default()
        };

        run(config, list_view.clone(), detail_view.clone())
            .await
            .unwrap();

        assert_eq!(list_view.super_heroes().len(), 6);
        assert_eq!(detail_view.super_hero().unwrap().name(), "Spider-pig");
    }

    #[tokio::test]
    async fn test_run_returns_invalid_selection_instead_of_exiting() {
        let list_view = Arc::new(MockSuperHeroesView::new());
        let detail_view = Arc::new(MockSuperHeroDetailView::new());
        let config = Config {
            selected_index: 99,
            ..Default::default()
        };

        let result = run(config, list_view.clone(), detail_view.clone()).await;

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::InvalidSelection { index: 99, len: 6 }))
        ));
        assert!(detail_view.super_hero().is_none());
    }
}
