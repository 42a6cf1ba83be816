pub mod data;
pub mod error;
pub mod id;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod snapshot;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Attribute name -> attribute value, as held by a single unit.
pub type Settings = BTreeMap<String, String>;
/// Unit id -> that unit's settings.
pub type Units = BTreeMap<String, Settings>;
/// Relation id -> units participating in the relation.
pub type Relations = BTreeMap<String, Units>;

/// A value found by [`RelationSource::get`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RelationValue {
    Attribute(String),
    Settings(Settings),
    Units(Units),
    Relations(Relations),
}

impl From<&str> for RelationValue {
    fn from(value: &str) -> Self {
        Self::Attribute(value.to_string())
    }
}

/// Query side of a relation-data client.
///
/// Missing data is never an error: lookups resolve to `None` or to an
/// empty set.
pub trait RelationSource {
    fn get(
        &self,
        attribute: Option<&str>,
        unit: Option<&str>,
        relation_id: Option<&str>,
    ) -> Option<RelationValue>;
    /// `relation_name` is accepted for signature compatibility only.
    fn relation_ids(&self, relation_name: Option<&str>) -> BTreeSet<String>;
    fn related_units(&self, relation_id: Option<&str>) -> BTreeSet<String>;
    fn relation_units(&self, relation_id: &str) -> Option<BTreeSet<String>>;
}
