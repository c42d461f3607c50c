use std::fmt;

use super::Renderer;
use crate::DecodeTable;

/// Code list consumed by the Onikiri simulator.
///
/// Every opcode becomes `<arity><S|U>, ` (`ZS`, `OU`, `TU`, ...) in specification order,
/// with a line break after every `per_line` codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnikiriRenderer {
    pub per_line: usize,
}

impl Default for OnikiriRenderer {
    fn default() -> Self {
        Self { per_line: 8 }
    }
}

impl Renderer for OnikiriRenderer {
    fn render(&self, table: &DecodeTable, out: &mut dyn fmt::Write) -> fmt::Result {
        for (count, entry) in table.iter().enumerate() {
            write!(out, "{}, ", entry.info().onikiri_code())?;
            if self.per_line != 0 && (count + 1) % self.per_line == 0 {
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
