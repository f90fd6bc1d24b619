// Wire types for the hero collection.
//
// These mirror the JSON the collection endpoint accepts and returns.
// `heroes-core` converts them into its domain model.

use serde::{Deserialize, Serialize};

/// A hero as returned by the collection (`{"id": 12, "name": "Dr. Nice"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroResponse {
    pub id: u32,
    pub name: String,
}

/// Body for `POST /<collection>`. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroCreate {
    pub name: String,
}

/// Body for `PUT /<collection>`. Replace semantics, identifier in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroUpdate {
    pub id: u32,
    pub name: String,
}
