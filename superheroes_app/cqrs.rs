mod query;

pub mod queries;

pub use query::*;
