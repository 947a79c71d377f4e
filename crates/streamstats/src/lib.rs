//! # streamstats
//!
//! Command line front-end for the streaming history views.
//!
//! The binary loads the configured export files once, then shows one view,
//! every view, or runs an interactive dashboard session reading one selection
//! per line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod dashboard;
pub mod display;
pub mod error;

pub use app::*;
pub use cli::*;
pub use dashboard::*;
pub use display::*;
pub use error::*;
