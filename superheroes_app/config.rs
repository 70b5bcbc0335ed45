use dotenvy::dotenv;
use std::env;

use superheroes_core::{AppError, ApplicationError, Result};

/// Upper bound for the simulated repository latency.
const MAX_LOADING_DELAY_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON file with the heroes to seed. Built-in heroes are used when unset.
    pub seed_file: Option<String>,
    pub loading_delay_ms: u64,
    /// Item tapped by the console front-end once the list is shown.
    pub selected_index: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ApplicationError> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config reading each variable through `var`.
    /// Unset numbers take their default; malformed ones are rejected.
    pub fn from_vars<F>(var: F) -> Result<Self, ApplicationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_file = var("SUPERHEROES_SEED_FILE").filter(|val| !val.trim().is_empty());

        let loading_delay_ms = parse_var::<u64, _>(&var, "SUPERHEROES_LOADING_DELAY_MS")?
            .unwrap_or(0)
            .min(MAX_LOADING_DELAY_MS);

        let selected_index = parse_var::<usize, _>(&var, "SUPERHEROES_SELECTED_INDEX")?.unwrap_or(0);

        Ok(Self {
            seed_file,
            loading_delay_ms,
            selected_index,
        })
    }
}

fn parse_var<T, F>(var: &F, key: &'static str) -> Result<Option<T>, ApplicationError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(AppError::InvalidConfig { key, value }.into()),
        },
    }
}
