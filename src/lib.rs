pub mod batch;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod models;
pub mod render;
pub mod services;

#[cfg(test)]
mod tests;

pub use batch::{FixtureBatch, GenerationReport};
pub use config::Config;
pub use errors::FixtureError;
pub use render::{RenderSettings, ShapeFixtureGenerator};
