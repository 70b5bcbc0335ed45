use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use superheroes_core::{AppError, ApplicationError};

/// Key under which the selected hero name travels from list to detail.
pub const SUPER_HERO_NAME_KEY: &str = "super_hero_name_key";

/// What the list screen hands over to the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPayload {
    #[serde(rename = "super_hero_name_key")]
    super_hero_name: String,
}

impl NavigationPayload {
    pub fn new(super_hero_name: impl Into<String>) -> Self {
        Self {
            super_hero_name: super_hero_name.into(),
        }
    }

    pub fn super_hero_name(&self) -> &str {
        &self.super_hero_name
    }
}

/// Receives one-shot navigation requests emitted by presenters.
pub trait Navigator: Send + Sync {
    fn open_super_hero_detail(&self, payload: NavigationPayload) -> Result<(), ApplicationError>;
}

/// Navigator that forwards every request to a channel, consumed by a `Router`.
#[derive(Clone)]
pub struct ChannelNavigator {
    sender: UnboundedSender<NavigationPayload>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, UnboundedReceiver<NavigationPayload>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn open_super_hero_detail(&self, payload: NavigationPayload) -> Result<(), ApplicationError> {
        self.sender
            .send(payload)
            .map_err(|_| ApplicationError::App(AppError::NavigationClosed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_keyed_by_super_hero_name_key() {
        let payload = NavigationPayload::new("SuperHero - 0");

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value[SUPER_HERO_NAME_KEY], "SuperHero - 0");
    }

    #[tokio::test]
    async fn test_channel_navigator_delivers_payloads_in_order() {
        let (navigator, mut receiver) = ChannelNavigator::new();

        navigator
            .open_super_hero_detail(NavigationPayload::new("Iron Man"))
            .unwrap();
        navigator
            .open_super_hero_detail(NavigationPayload::new("Hulk"))
            .unwrap();

        assert_eq!(receiver.recv().await.unwrap().super_hero_name(), "Iron Man");
        assert_eq!(receiver.recv().await.unwrap().super_hero_name(), "Hulk");
    }

    #[test]
    fn test_channel_navigator_fails_when_receiver_is_gone() {
        let (navigator, receiver) = ChannelNavigator::new();
        drop(receiver);

        let result = navigator.open_super_hero_detail(NavigationPayload::new("Hulk"));

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::NavigationClosed))
        ));
    }
}
