//! Localizer construction for resource scopes

use crate::localizer::{NullStringLocalizer, StringLocalizer};
use std::any;
use std::sync::Arc;
use tracing::debug;

/// The logical grouping under which translations would normally be
/// organized: a Rust type path, or a base name plus the assembly-like
/// location that defines it.
///
/// Scopes are structurally unconstrained; empty names are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceScope {
    /// Scope identified by a type path
    Type(&'static str),
    /// Scope identified by a base name and location
    Named {
        base_name: String,
        location: String,
    },
}

impl ResourceScope {
    /// Scope for the resources of type `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self::Type(any::type_name::<T>())
    }

    /// Scope for a base name within a location.
    pub fn named<B, L>(base_name: B, location: L) -> Self
    where
        B: Into<String>,
        L: Into<String>,
    {
        Self::Named {
            base_name: base_name.into(),
            location: location.into(),
        }
    }
}

/// Produces a [`StringLocalizer`] for a resource scope.
pub trait StringLocalizerFactory: Send + Sync {
    /// Create a localizer for the given resource scope.
    fn create(&self, scope: &ResourceScope) -> Arc<dyn StringLocalizer>;

    /// Create a localizer for a base name within a location.
    fn create_named(&self, base_name: &str, location: &str) -> Arc<dyn StringLocalizer> {
        self.create(&ResourceScope::named(base_name, location))
    }
}

/// Factory used when no translation resources are configured.
///
/// Accepts any scope without validation and always hands out the shared
/// [`NullStringLocalizer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStringLocalizerFactory;

impl StringLocalizerFactory for NullStringLocalizerFactory {
    fn create(&self, scope: &ResourceScope) -> Arc<dyn StringLocalizer> {
        debug!("creating fallback localizer for scope {:?}", scope);
        NullStringLocalizer::instance()
    }
}
