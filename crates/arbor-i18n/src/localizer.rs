//! Message lookup contract and its fallback implementation

use crate::argument::{FormatArgument, FormatValue};
use crate::error::FormatResult;
use crate::format::format_positional;
use crate::pluralization::default_plural_rule;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::trace;
use unic_langid::LanguageIdentifier;

/// Shared fallback localizer, constructed once per process.
static INSTANCE: Lazy<Arc<NullStringLocalizer>> = Lazy::new(|| Arc::new(NullStringLocalizer));

/// The result of a message lookup.
///
/// A `LocalizedString` is not encoded for any output format, so `value` can
/// carry the formatted text including the argument values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    /// The lookup key
    pub name: String,
    /// The resolved display text after formatting
    pub value: String,
    /// Whether a real translation resource produced this value
    pub resource_found: bool,
}

impl LocalizedString {
    /// Create a lookup result.
    pub fn new<N, V>(name: N, value: V, resource_found: bool) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
            resource_found,
        }
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for LocalizedString {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Resolves message keys to displayable text.
///
/// Implementations are shared across request handlers, so they must be
/// `Send + Sync` and every operation must be safe to call concurrently.
pub trait StringLocalizer: Send + Sync {
    /// Resolve a key without substitution.
    fn get(&self, name: &str) -> LocalizedString;

    /// Resolve a key and substitute positional arguments.
    ///
    /// Fails only when the format string cannot be applied to the supplied
    /// arguments; a missing translation is not an error.
    fn get_with_args(&self, name: &str, args: &[FormatArgument]) -> FormatResult<LocalizedString>;

    /// Enumerate every known string, optionally including parent resource
    /// scopes.
    fn all_strings(
        &self,
        include_parent_scopes: bool,
    ) -> Box<dyn Iterator<Item = LocalizedString> + '_>;

    /// A localizer scoped to the given locale.
    fn with_locale(&self, locale: &LanguageIdentifier) -> Arc<dyn StringLocalizer>;
}

/// Localizer used when no translation resources are configured.
///
/// Every lookup passes the key through unchanged apart from argument
/// substitution, and every result reports `resource_found == false` so
/// callers can tell a pass-through from a real translation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStringLocalizer;

impl NullStringLocalizer {
    /// The process-wide shared instance.
    pub fn instance() -> Arc<NullStringLocalizer> {
        Arc::clone(&INSTANCE)
    }
}

impl StringLocalizer for NullStringLocalizer {
    fn get(&self, name: &str) -> LocalizedString {
        LocalizedString::new(name, name, false)
    }

    fn get_with_args(&self, name: &str, args: &[FormatArgument]) -> FormatResult<LocalizedString> {
        trace!("resolving '{}' without a translation backend", name);

        // A single pluralization directive replaces the template with the
        // selected form and puts the count at position {0}.
        if let [FormatArgument::Plural(plural)] = args {
            let form = plural.select_form(default_plural_rule)?;
            let value = format_positional(form, &plural.format_values())?;
            return Ok(LocalizedString::new(name, value, false));
        }

        let values: Vec<FormatValue> = args.iter().map(FormatArgument::scalar_value).collect();
        let value = format_positional(name, &values)?;
        Ok(LocalizedString::new(name, value, false))
    }

    fn all_strings(
        &self,
        _include_parent_scopes: bool,
    ) -> Box<dyn Iterator<Item = LocalizedString> + '_> {
        Box::new(std::iter::empty())
    }

    fn with_locale(&self, locale: &LanguageIdentifier) -> Arc<dyn StringLocalizer> {
        trace!("ignoring locale switch to {}: no resources are loaded", locale);
        Self::instance()
    }
}
