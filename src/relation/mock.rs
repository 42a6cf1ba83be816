use crate::relation::{RelationSource, RelationValue};
use std::collections::BTreeSet;

/// A source with no relations at all.
pub struct EmptySource {}

impl EmptySource {
    pub fn new() -> Self {
        Self {}
    }
}

impl RelationSource for EmptySource {
    fn get(
        &self,
        _attribute: Option<&str>,
        _unit: Option<&str>,
        _relation_id: Option<&str>,
    ) -> Option<RelationValue> {
        None
    }

    fn relation_ids(&self, _relation_name: Option<&str>) -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn related_units(&self, _relation_id: Option<&str>) -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn relation_units(&self, _relation_id: &str) -> Option<BTreeSet<String>> {
        None
    }
}
