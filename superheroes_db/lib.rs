mod repository;
mod seeds;

pub use repository::*;
pub use seeds::{bootstrap_repository, default_super_heroes, load_seed_file};
