use super::data::RelationData;
use super::error::FixtureError;
use super::{RelationSource, RelationValue};
use crate::config::fixture::FixtureConfig;
use log::{debug, trace};
use std::collections::BTreeSet;

pub const DEFAULT_RELATION_ID: &str = "foo:0";

/// Read-only relation data answering queries the way a relation-data
/// client would.
///
/// Queries without a relation id, or with the default one, address the
/// data as flat settings. Any other relation id navigates relation id ->
/// unit -> attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationSnapshot {
    data: RelationData,
    default_relation_id: String,
}

impl RelationSnapshot {
    pub fn new(data: impl Into<RelationData>) -> Self {
        Self {
            data: data.into(),
            default_relation_id: DEFAULT_RELATION_ID.to_string(),
        }
    }

    pub fn with_default_relation_id(mut self, relation_id: &str) -> Self {
        self.default_relation_id = relation_id.to_string();
        self
    }

    pub fn from_config(config: &FixtureConfig) -> Result<Self, FixtureError> {
        let path = config.get_fixture_path()?;
        let default_relation_id = config.get_default_relation_id()?;
        let data = RelationData::from_path(&path)?;
        Ok(Self::new(data).with_default_relation_id(&default_relation_id))
    }

    pub fn default_relation_id(&self) -> &str {
        &self.default_relation_id
    }

    fn is_default(&self, relation_id: Option<&str>) -> bool {
        match relation_id {
            None | Some("") => true,
            Some(relation_id) => relation_id == self.default_relation_id,
        }
    }

    fn get_default(&self, attribute: Option<&str>) -> Option<RelationValue> {
        match (&self.data, attribute) {
            (RelationData::Flat(settings), None) => Some(RelationValue::Settings(settings.clone())),
            (RelationData::Nested(relations), None) => {
                Some(RelationValue::Relations(relations.clone()))
            }
            (RelationData::Flat(settings), Some(attribute)) => settings
                .get(attribute)
                .map(|value| RelationValue::Attribute(value.clone())),
            (RelationData::Nested(relations), Some(attribute)) => relations
                .get(attribute)
                .map(|units| RelationValue::Units(units.clone())),
        }
    }

    fn get_nested(
        &self,
        attribute: Option<&str>,
        unit: Option<&str>,
        relation_id: &str,
    ) -> Option<RelationValue> {
        let units = self.data.units(relation_id)?;
        let settings = units.get(unit?)?;
        // whole-unit reads are only served by the default relation
        let value = settings.get(attribute?)?;
        Some(RelationValue::Attribute(value.clone()))
    }
}

impl RelationSource for RelationSnapshot {
    fn get(
        &self,
        attribute: Option<&str>,
        unit: Option<&str>,
        relation_id: Option<&str>,
    ) -> Option<RelationValue> {
        let value = if self.is_default(relation_id) {
            trace!("get {:?} from default relation", attribute);
            self.get_default(attribute)
        } else {
            let relation_id = relation_id.unwrap_or_default();
            trace!("get {:?} from {} unit {:?}", attribute, relation_id, unit);
            self.get_nested(attribute, unit, relation_id)
        };
        if value.is_none() {
            debug!(
                "no value for attribute {:?}, unit {:?}, relation {:?}",
                attribute, unit, relation_id
            );
        }
        value
    }

    fn relation_ids(&self, _relation_name: Option<&str>) -> BTreeSet<String> {
        self.data.keys()
    }

    fn related_units(&self, relation_id: Option<&str>) -> BTreeSet<String> {
        relation_id
            .and_then(|relation_id| self.data.units(relation_id))
            .map(|units| units.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn relation_units(&self, relation_id: &str) -> Option<BTreeSet<String>> {
        let units = self.data.units(relation_id)?;
        Some(units.keys().cloned().collect())
    }
}
