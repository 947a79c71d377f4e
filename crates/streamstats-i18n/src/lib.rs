//! # streamstats i18n
//!
//! Fluent message catalog for view names, chart titles and axis labels.
//!
//! Locale files live under `locales/<tag>/main.ftl` and are compiled into the
//! binary. The build script rejects locales whose message ids or variables
//! disagree with each other.
//!
//! ```rust
//! use streamstats_i18n::{Catalog, Locale, MessageKey};
//!
//! # fn example() -> Result<(), streamstats_i18n::I18nError> {
//! let catalog = Catalog::new(Locale::English)?;
//! assert_eq!(catalog.text(MessageKey::ViewTopArtists), "Top Artists");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod locale;
pub mod messages;

pub use catalog::*;
pub use error::*;
pub use locale::*;
pub use messages::*;

pub use fluent_bundle::{FluentArgs, FluentValue};
