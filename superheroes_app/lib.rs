pub mod app_bus;
pub mod config;
pub mod cqrs;
pub mod navigation;
pub mod presenters;
pub mod queries_handlers;
pub mod repository;
pub mod router;
pub mod views;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
