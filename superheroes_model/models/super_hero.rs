use serde::{Deserialize, Serialize};

/// A single super hero entry.
///
/// Heroes are identified by their `name`: a repository never stores two
/// heroes with the same one. Once built, a hero is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperHero {
    name: String,
    /// Opaque URL of the hero picture, resolved by whoever renders it.
    photo: String,
    /// Avengers membership, rendered as a badge.
    is_avenger: bool,
    description: String,
}

impl SuperHero {
    pub fn new(
        name: impl Into<String>,
        photo: impl Into<String>,
        is_avenger: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            photo: photo.into(),
            is_avenger,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn is_avenger(&self) -> bool {
        self.is_avenger
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
