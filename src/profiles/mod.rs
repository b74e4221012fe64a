//! Active profile sets.
//!
//! A [`ProfileSet`] is the union of the configuration profiles the user asked
//! for and the platform profiles detected on the host. Membership is the only
//! operation that matters; iteration order is sorted for stable output.

use std::collections::BTreeSet;

/// Profile activated when the user names none.
pub const DEFAULT_PROFILE: &str = "default";

/// A case-sensitive set of profile names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSet {
    names: BTreeSet<String>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine requested configuration profiles with platform profiles.
    ///
    /// An empty request activates [`DEFAULT_PROFILE`].
    pub fn resolve<R, P>(requested: R, platform: P) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut set: ProfileSet = requested.into_iter().collect();
        if set.is_empty() {
            set.insert(DEFAULT_PROFILE);
        }
        set.extend(platform);
        set
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ProfileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ProfileSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}
