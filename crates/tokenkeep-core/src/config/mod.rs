//! Configuration loading and management.

mod loader;
mod schema;

pub use schema::*;
