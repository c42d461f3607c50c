//! Decode table
//!
//! Built once from validated records and never modified afterwards. Entries are kept in
//! specification order, so the position of an entry is also its [`Ordinal`].
mod error;

pub use error::BuildError;

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    loader::LoaderConfig,
    record::{DecodeInfo, OpcodeRecord, Ordinal},
    Error,
};

/// A record together with its enumeration position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeEntry {
    pub ordinal: Ordinal,
    pub record: OpcodeRecord,
}

impl DecodeEntry {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn opcode(&self) -> u64 {
        self.record.opcode
    }

    pub fn info(&self) -> DecodeInfo {
        self.record.decode_info()
    }
}

/// Immutable mapping from opcode identity to its decode attributes.
#[derive(Debug, Clone, Default)]
pub struct DecodeTable {
    /// Keyed by name, in specification order
    entries: IndexMap<String, DecodeEntry>,
    /// Raw opcode value -> index into `entries`
    by_value: HashMap<u64, usize>,
}

/// Assign ordinals to `records` and index them by name and by raw opcode value.
///
/// Rejects repeated names and repeated opcode values; the error names both lines.
pub fn build(records: Vec<OpcodeRecord>) -> Result<DecodeTable, BuildError> {
    if u32::try_from(records.len()).is_err() {
        return Err(BuildError::TooManyOpcodes(records.len()));
    }

    let mut entries: IndexMap<String, DecodeEntry> = IndexMap::with_capacity(records.len());
    let mut by_value: HashMap<u64, usize> = HashMap::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        if let Some(first) = entries.get(&record.name) {
            return Err(BuildError::DuplicateOpcodeName {
                name: record.name,
                first_line: first.record.line,
                second_line: record.line,
            });
        }
        if let Some(&first) = by_value.get(&record.opcode) {
            return Err(BuildError::DuplicateOpcodeValue {
                value: record.opcode,
                first_line: entries[first].record.line,
                second_line: record.line,
            });
        }

        by_value.insert(record.opcode, index);
        // Bounded by the length check above
        let ordinal = Ordinal::new(index as u32);
        entries.insert(record.name.clone(), DecodeEntry { ordinal, record });
    }

    debug!("Built decode table with {} opcodes", entries.len());
    Ok(DecodeTable { entries, by_value })
}

impl DecodeTable {
    /// Load `source` with the default loader settings and build the table
    pub fn from_source(source: &str) -> Result<Self, Error> {
        Self::from_source_with(&LoaderConfig::default(), source)
    }

    pub fn from_source_with(config: &LoaderConfig, source: &str) -> Result<Self, Error> {
        let records = config.load(source)?;
        Ok(build(records)?)
    }

    /// Decode attributes of the opcode called `name`
    pub fn lookup(&self, name: &str) -> Option<DecodeInfo> {
        self.entry(name).map(DecodeEntry::info)
    }

    /// Name and decode attributes of the opcode encoded as `raw`
    pub fn lookup_by_opcode_value(&self, raw: u64) -> Option<(&str, DecodeInfo)> {
        self.entry_by_opcode_value(raw).map(|entry| (entry.name(), entry.info()))
    }

    /// Opcode names in specification order
    pub fn all_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn entry(&self, name: &str) -> Option<&DecodeEntry> {
        self.entries.get(name)
    }

    pub fn entry_by_opcode_value(&self, raw: u64) -> Option<&DecodeEntry> {
        let index = *self.by_value.get(&raw)?;
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn entry_by_ordinal(&self, ordinal: Ordinal) -> Option<&DecodeEntry> {
        self.entries.get_index(ordinal.as_usize()).map(|(_, entry)| entry)
    }

    pub fn ordinal_of(&self, name: &str) -> Option<Ordinal> {
        self.entry(name).map(|entry| entry.ordinal)
    }

    /// Entries in specification order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DecodeEntry> + '_ {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DecodeTable {
    type Item = &'a DecodeEntry;
    type IntoIter = indexmap::map::Values<'a, String, DecodeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
