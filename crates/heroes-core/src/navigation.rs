//! Navigation capabilities consumed by view controllers.
//!
//! [`Navigator`] moves between locations; [`RouteParams`] exposes the
//! parameters of the active location. [`History`] and [`ParamMap`] are
//! the in-memory implementations the CLI and tests use.

use std::collections::HashMap;

/// Moves between locations.
pub trait Navigator: Send {
    /// Return to the previous location.
    fn back(&mut self);

    /// The active location, if any.
    fn current(&self) -> Option<&str>;
}

/// Read access to the active location's route parameters.
pub trait RouteParams {
    fn get(&self, name: &str) -> Option<&str>;
}

// ── History ──────────────────────────────────────────────────────────

/// Stack of visited locations. `back()` pops to the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    stack: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new location.
    pub fn navigate(&mut self, location: impl Into<String>) {
        self.stack.push(location.into());
    }
}

impl<S: Into<String>> FromIterator<S> for History {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            stack: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Navigator for History {
    /// The first location is the root and is never popped.
    fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn current(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }
}

// ── ParamMap ─────────────────────────────────────────────────────────

/// Route parameters extracted from a location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    params: HashMap<String, String>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Match `location` against a pattern such as `/detail/:id`.
    ///
    /// Segments starting with `:` capture; all others must match exactly.
    /// Returns `None` when the location doesn't fit the pattern.
    pub fn from_route(pattern: &str, location: &str) -> Option<Self> {
        let pattern_segments: Vec<&str> = segments(pattern).collect();
        let location_segments: Vec<&str> = segments(location).collect();
        if pattern_segments.len() != location_segments.len() {
            return None;
        }

        let mut params = Self::new();
        for (expected, actual) in pattern_segments.iter().zip(&location_segments) {
            if let Some(name) = expected.strip_prefix(':') {
                params.insert(name, *actual);
            } else if expected != actual {
                return None;
            }
        }
        Some(params)
    }
}

impl RouteParams for ParamMap {
    fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|s| !s.is_empty())
}
