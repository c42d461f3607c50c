use std::fmt;

use serde::Serialize;

use super::Renderer;
use crate::{
    record::{Ordinal, RegisterArity, SignExtension},
    DecodeTable,
};

#[derive(Serialize)]
struct JsonEntry<'a> {
    ordinal: Ordinal,
    opcode: u64,
    name: &'a str,
    register_arity: RegisterArity,
    sign_extension: SignExtension,
    note: Option<&'a str>,
}

/// Pretty-printed JSON array with one object per opcode
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, table: &DecodeTable, out: &mut dyn fmt::Write) -> fmt::Result {
        let entries: Vec<JsonEntry<'_>> = table
            .iter()
            .map(|entry| JsonEntry {
                ordinal: entry.ordinal,
                opcode: entry.opcode(),
                name: entry.name(),
                register_arity: entry.record.register_arity,
                sign_extension: entry.record.sign_extension,
                note: entry.record.note.as_deref(),
            })
            .collect();

        let text = serde_json::to_string_pretty(&entries).map_err(|_| fmt::Error)?;
        writeln!(out, "{}", text)
    }
}
