//! # streamstats config
//!
//! Type-safe configuration management for streamstats.
//!
//! This crate provides configuration loading from YAML, TOML or JSON files,
//! environment variable overrides, validation and atomic persistence.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
