use tokio::sync::mpsc::UnboundedReceiver;

use superheroes_core::{ApplicationError, Result};

use crate::{
    navigation::NavigationPayload,
    presenters::{DetailState, SuperHeroDetailPresenter},
};

/// Opens the detail screen for every navigation request sent by a
/// `ChannelNavigator`.
pub struct Router {
    receiver: UnboundedReceiver<NavigationPayload>,
    detail: SuperHeroDetailPresenter,
}

impl Router {
    pub fn new(
        receiver: UnboundedReceiver<NavigationPayload>,
        detail: SuperHeroDetailPresenter,
    ) -> Self {
        Self { receiver, detail }
    }

    /// Waits for the next request and loads its hero.
    /// Returns `None` once every navigator has been dropped.
    pub async fn route_next(&mut self) -> Result<Option<DetailState>, ApplicationError> {
        let Some(payload) = self.receiver.recv().await else {
            tracing::debug!("Navigation channel closed");
            return Ok(None);
        };

        let state = self.detail.load(payload.super_hero_name()).await?;
        Ok(Some(state.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use superheroes_model::test_utils::super_heroes_factory;

    use super::*;
    use crate::{
        app_bus::AppBus,
        navigation::{ChannelNavigator, Navigator},
        repository::SuperHeroesRepository,
        test_utils::tests::{MockSuperHeroDetailView, MockSuperHeroesRepository},
    };

    #[tokio::test]
    async fn test_route_next_loads_requested_super_hero() {
        let repository: Arc<dyn SuperHeroesRepository> = Arc::new(
            MockSuperHeroesRepository::with_super_heroes(super_heroes_factory(3, false)),
        );
        let app_bus = Arc::new(AppBus::new(repository));
        let view = Arc::new(MockSuperHeroDetailView::new());
        let (navigator, receiver) = ChannelNavigator::new();
        let mut router = Router::new(
            receiver,
            SuperHeroDetailPresenter::new(app_bus, view.clone()),
        );

        navigator
            .open_super_hero_detail(NavigationPayload::new("SuperHero - 2"))
            .unwrap();
        drop(navigator);

        let state = router.route_next().await.unwrap();
        assert!(matches!(
            state,
            Some(DetailState::Loaded(ref hero)) if hero.name() == "SuperHero - 2"
        ));
        assert_eq!(view.super_hero().unwrap().name(), "SuperHero - 2");

        assert!(router.route_next().await.unwrap().is_none());
    }
}
