pub mod error;
#[cfg(test)]
mod tests;

use crate::args::{Command, Format};
use error::CLIError;
use log::{debug, info};
use relation_fixture::relation::{RelationSource, RelationValue, Settings};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

pub struct CLI<'a> {
    source: Box<dyn RelationSource>,
    stdout: &'a mut dyn Write,
    format: Format,
}

impl<'a> CLI<'a> {
    pub fn new(source: Box<dyn RelationSource>, stdout: &'a mut dyn Write, format: Format) -> Self {
        Self {
            source,
            stdout,
            format,
        }
    }

    pub fn run(&mut self, command: &Command) -> Result<(), CLIError> {
        info!("running {:?}", command);
        match command {
            Command::Get {
                attribute,
                unit,
                relation_id,
            } => {
                let value = self.source.get(
                    attribute.as_deref(),
                    unit.as_deref(),
                    relation_id.as_deref(),
                );
                debug!("relation-get returned {:?}", value);
                self.write_value(value.as_ref())
            }
            Command::Ids { relation_name } => {
                let ids = self.source.relation_ids(relation_name.as_deref());
                self.write_set(&ids)
            }
            Command::List { relation_id } => match self.source.relation_units(relation_id) {
                Some(units) => self.write_set(&units),
                None => Err(CLIError::RelationNotFound(relation_id.clone())),
            },
            Command::Related { relation_id } => {
                let units = self.source.related_units(relation_id.as_deref());
                self.write_set(&units)
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CLIError> {
        serde_json::to_writer(&mut self.stdout, value)?;
        writeln!(self.stdout)?;
        Ok(())
    }

    fn write_set(&mut self, items: &BTreeSet<String>) -> Result<(), CLIError> {
        if self.format == Format::Json {
            return self.write_json(items);
        }
        for item in items {
            writeln!(self.stdout, "{}", item)?;
        }
        Ok(())
    }

    fn write_value(&mut self, value: Option<&RelationValue>) -> Result<(), CLIError> {
        if self.format == Format::Json {
            return self.write_json(&value);
        }
        match value {
            None => {}
            Some(RelationValue::Attribute(value)) => writeln!(self.stdout, "{}", value)?,
            Some(RelationValue::Settings(settings)) => self.write_settings(settings, 0)?,
            Some(RelationValue::Units(units)) => {
                for (unit, settings) in units {
                    writeln!(self.stdout, "{}:", unit)?;
                    self.write_settings(settings, 1)?;
                }
            }
            Some(RelationValue::Relations(relations)) => {
                for (relation_id, units) in relations {
                    writeln!(self.stdout, "{}:", relation_id)?;
                    for (unit, settings) in units {
                        writeln!(self.stdout, "  {}:", unit)?;
                        self.write_settings(settings, 2)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn write_settings(&mut self, settings: &Settings, depth: usize) -> Result<(), CLIError> {
        let indent = "  ".repeat(depth);
        for (key, value) in settings {
            writeln!(self.stdout, "{}{}: {}", indent, key, value)?;
        }
        Ok(())
    }
}
