//! Output formats for a [`DecodeTable`]
//!
//! Renderers only see the table's public query surface; they never look at the
//! specification text again.
mod json;
mod onikiri;
mod rust;

pub use json::JsonRenderer;
pub use onikiri::OnikiriRenderer;
pub use rust::{variant_ident, RustRenderer};

use std::fmt;

use crate::DecodeTable;

pub trait Renderer {
    fn render(&self, table: &DecodeTable, out: &mut dyn fmt::Write) -> fmt::Result;

    fn render_to_string(&self, table: &DecodeTable) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.render(table, &mut out)?;
        Ok(out)
    }
}
