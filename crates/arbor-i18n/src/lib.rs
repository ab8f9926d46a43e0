//! Fallback localization support for the Arbor content management framework
//!
//! When no translation resources are configured, message lookups must still
//! succeed: this crate resolves every key to itself (with arguments
//! substituted) and tags the result as not found, so an unconfigured
//! installation never fails on localization. It includes:
//!
//! - Key pass-through lookups tagged with `resource_found == false`
//! - Positional `{n}` argument substitution with strict format errors
//! - Count-dependent phrases via a two-bucket pluralization rule
//! - A scope-agnostic factory handing out one shared localizer
//!
//! # Example
//!
//! ```rust
//! use arbor_i18n::{
//!     localizer_args, NullStringLocalizerFactory, ResourceScope, StringLocalizer,
//!     StringLocalizerFactory,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = NullStringLocalizerFactory;
//! let localizer = factory.create(&ResourceScope::named("AdminMenu", "Arbor.Navigation"));
//!
//! let plain = localizer.get("Welcome back!");
//! assert_eq!(plain.value, "Welcome back!");
//! assert!(!plain.resource_found);
//!
//! let greeting = localizer.get_with_args("Hello, {0}!", &localizer_args!["World"])?;
//! assert_eq!(greeting.value, "Hello, World!");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod argument;
pub mod error;
pub mod factory;
pub mod format;
pub mod localizer;
pub mod pluralization;

pub use argument::{FormatArgument, FormatValue, PluralArgument};
pub use error::{FormatError, FormatResult};
pub use factory::{NullStringLocalizerFactory, ResourceScope, StringLocalizerFactory};
pub use format::format_positional;
pub use localizer::{LocalizedString, NullStringLocalizer, StringLocalizer};
pub use pluralization::{default_plural_rule, PluralRule};

// Re-export the language identifier type used for locale scoping
pub use unic_langid::LanguageIdentifier;
