//! Geocoder and router provider listings.
//!
//! Provider pickers show the configured default first and label it. Both
//! operations return new vectors; the input slice is never touched.
//!
//! # Examples
//! ```
//! use waymark_core::{Provider, mark_default, sort_default_first};
//!
//! let providers = vec![
//!     Provider::new("osm", "OpenStreetMap"),
//!     Provider::new("here", "HERE").with_default(true),
//! ];
//! let ordered = sort_default_first(&mark_default(&providers, "here"));
//! assert_eq!(ordered[0].name, "HERE (default)");
//! ```

/// Suffix appended to the default provider's display name.
pub const DEFAULT_SUFFIX: &str = " (default)";

/// A selectable geocoding or routing provider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Provider {
    /// Stable provider identifier.
    pub pid: String,
    /// Display name.
    pub name: String,
    /// Whether this provider is the configured default.
    #[cfg_attr(feature = "serde", serde(default, rename = "default"))]
    pub is_default: bool,
}

impl Provider {
    /// Construct a non-default provider.
    #[must_use]
    pub fn new(pid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            name: name.into(),
            is_default: false,
        }
    }

    /// Set the default flag while consuming `self`, enabling chaining.
    #[must_use]
    pub const fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

/// Return copies of `providers` with the one matching `default_pid` labelled.
///
/// Every provider whose `pid` equals `default_pid` gets [`DEFAULT_SUFFIX`]
/// appended to its name. Order is preserved.
#[must_use]
pub fn mark_default(providers: &[Provider], default_pid: &str) -> Vec<Provider> {
    providers
        .iter()
        .map(|provider| {
            let mut copy = provider.clone();
            if copy.pid == default_pid {
                copy.name.push_str(DEFAULT_SUFFIX);
            }
            copy
        })
        .collect()
}

/// Return copies of `providers` with default providers moved to the front.
///
/// Each default provider is moved to the front as it is encountered, so
/// with several defaults the last one listed ends up first. Non-default
/// providers keep their relative order.
#[must_use]
pub fn sort_default_first(providers: &[Provider]) -> Vec<Provider> {
    providers
        .iter()
        .filter(|provider| provider.is_default)
        .rev()
        .chain(providers.iter().filter(|provider| !provider.is_default))
        .cloned()
        .collect()
}
