//! Domain model for heroes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned hero identifier.
///
/// Serialized transparently as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(u32);

impl HeroId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for HeroId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HeroId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A hero known to the store.
///
/// The identifier never changes once assigned; only `name` is editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    pub fn new(id: impl Into<HeroId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A hero that has not been created yet. The store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_id_parses_with_whitespace() {
        assert_eq!(" 12 ".parse::<HeroId>().ok(), Some(HeroId::new(12)));
        assert!("twelve".parse::<HeroId>().is_err());
        assert!("-1".parse::<HeroId>().is_err());
    }

    #[test]
    fn hero_id_is_a_bare_number_on_the_wire() {
        let json = serde_json::to_string(&Hero::new(7, "Celeritas")).unwrap_or_default();
        assert_eq!(json, r#"{"id":7,"name":"Celeritas"}"#);
    }
}
