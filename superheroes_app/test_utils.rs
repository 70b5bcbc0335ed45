#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use superheroes_core::{ApplicationError, DbError};
    use superheroes_model::models::super_hero::SuperHero;

    use crate::{
        navigation::{NavigationPayload, Navigator},
        repository::SuperHeroesRepository,
        views::{SuperHeroDetailView, SuperHeroesView},
    };

    #[derive(Default, Clone)]
    pub struct MockSuperHeroesRepository {
        super_heroes: Arc<Vec<SuperHero>>,
        unavailable: bool,
    }

    impl MockSuperHeroesRepository {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn with_super_heroes(super_heroes: Vec<SuperHero>) -> Self {
            Self {
                super_heroes: Arc::new(super_heroes),
                unavailable: false,
            }
        }

        /// A repository whose every call fails.
        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Default::default()
            }
        }

        fn check_available(&self) -> Result<(), ApplicationError> {
            if self.unavailable {
                return Err(ApplicationError::Infrastructure(
                    "repository unavailable".to_string(),
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SuperHeroesRepository for MockSuperHeroesRepository {
        async fn get_all(&self) -> Result<Vec<SuperHero>, ApplicationError> {
            self.check_available()?;
            Ok(self.super_heroes.to_vec())
        }

        async fn get_by_name(&self, name: &str) -> Result<SuperHero, ApplicationError> {
            self.check_available()?;
            self.super_heroes
                .iter()
                .find(|h| h.name() == name)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::SuperHeroNotFound(name.to_string())))
        }
    }

    #[derive(Default)]
    struct ListViewState {
        loading: bool,
        loading_shown_count: usize,
        empty_case_visible: bool,
        super_heroes: Vec<SuperHero>,
    }

    #[derive(Default, Clone)]
    pub struct MockSuperHeroesView {
        state: Arc<Mutex<ListViewState>>,
    }

    impl MockSuperHeroesView {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn is_loading(&self) -> bool {
            self.state.lock().unwrap().loading
        }

        pub fn loading_shown_count(&self) -> usize {
            self.state.lock().unwrap().loading_shown_count
        }

        pub fn is_empty_case_visible(&self) -> bool {
            self.state.lock().unwrap().empty_case_visible
        }

        pub fn super_heroes(&self) -> Vec<SuperHero> {
            self.state.lock().unwrap().super_heroes.clone()
        }
    }

    impl SuperHeroesView for MockSuperHeroesView {
        fn show_loading(&self) {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
            state.loading_shown_count += 1;
        }

        fn hide_loading(&self) {
            self.state.lock().unwrap().loading = false;
        }

        fn show_empty_case(&self) {
            self.state.lock().unwrap().empty_case_visible = true;
        }

        fn hide_empty_case(&self) {
            self.state.lock().unwrap().empty_case_visible = false;
        }

        fn show_super_heroes(&self, super_heroes: &[SuperHero]) {
            self.state.lock().unwrap().super_heroes = super_heroes.to_vec();
        }
    }

    #[derive(Default)]
    struct DetailViewState {
        loading: bool,
        super_hero: Option<SuperHero>,
        not_found: Option<String>,
    }

    #[derive(Default, Clone)]
    pub struct MockSuperHeroDetailView {
        state: Arc<Mutex<DetailViewState>>,
    }

    impl MockSuperHeroDetailView {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn is_loading(&self) -> bool {
            self.state.lock().unwrap().loading
        }

        /// The hero last drawn; its name doubles as the screen title.
        pub fn super_hero(&self) -> Option<SuperHero> {
            self.state.lock().unwrap().super_hero.clone()
        }

        pub fn not_found(&self) -> Option<String> {
            self.state.lock().unwrap().not_found.clone()
        }
    }

    impl SuperHeroDetailView for MockSuperHeroDetailView {
        fn show_loading(&self) {
            self.state.lock().unwrap().loading = true;
        }

        fn hide_loading(&self) {
            self.state.lock().unwrap().loading = false;
        }

        fn show_super_hero(&self, super_hero: &SuperHero) {
            let mut state = self.state.lock().unwrap();
            state.super_hero = Some(super_hero.clone());
            state.not_found = None;
        }

        fn show_not_found(&self, name: &str) {
            let mut state = self.state.lock().unwrap();
            state.super_hero = None;
            state.not_found = Some(name.to_string());
        }
    }

    #[derive(Default, Clone)]
    pub struct MockNavigator {
        opened: Arc<Mutex<Vec<NavigationPayload>>>,
    }

    impl MockNavigator {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn opened(&self) -> Vec<NavigationPayload> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl Navigator for MockNavigator {
        fn open_super_hero_detail(
            &self,
            payload: NavigationPayload,
        ) -> Result<(), ApplicationError> {
            self.opened.lock().unwrap().push(payload);
            Ok(())
        }
    }
}
