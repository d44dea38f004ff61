//! Scratch game engine. Keep this crate free of IO and platform concerns.

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod matrix;
pub mod probability;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod symbols;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use matcher::*;
pub use matrix::*;
pub use probability::*;
pub use rng::*;
pub use rules::*;
pub use scoring::*;
pub use symbols::*;
