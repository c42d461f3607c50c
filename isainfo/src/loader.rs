//! Specification loader
//!
//! Turns the delimited specification text into [`OpcodeRecord`]s, in file order.
//! Comment lines and blank lines are dropped, every other line must be a complete record.
//! The first bad line aborts the load.
mod error;

pub use error::ParseError;

use tracing::debug;

use crate::record::{is_valid_identifier, OpcodeRecord, RegisterArity, SignExtension};

/// Number of columns a record line is allowed to have.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordLayout {
    /// `opcode,name,arity,sext`
    Compact,
    /// `opcode,name,arity,sext,note`
    Annotated,
    /// Either of the above, decided per line
    #[default]
    Any,
}

impl RecordLayout {
    fn accepts(&self, fields: usize) -> bool {
        match self {
            RecordLayout::Compact => fields == 4,
            RecordLayout::Annotated => fields == 5,
            RecordLayout::Any => fields == 4 || fields == 5,
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            RecordLayout::Compact => "4",
            RecordLayout::Annotated => "5",
            RecordLayout::Any => "4 or 5",
        }
    }
}

/// Lexical settings of the specification format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Lines starting with this character are skipped
    pub comment_marker: char,
    /// Column separator
    pub delimiter: char,
    pub layout: RecordLayout,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { comment_marker: '#', delimiter: ',', layout: RecordLayout::Any }
    }
}

impl LoaderConfig {
    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse `source` into records, preserving the order of the data rows.
    pub fn load(&self, source: &str) -> Result<Vec<OpcodeRecord>, ParseError> {
        let mut records = Vec::new();
        let mut comments = 0usize;

        for (index, raw_line) in source.lines().enumerate() {
            let line = index + 1;
            // Byte order mark left by some editors
            let raw_line =
                if index == 0 { raw_line.trim_start_matches('\u{feff}') } else { raw_line };
            let trimmed = raw_line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with(self.comment_marker) {
                comments += 1;
                continue;
            }
            records.push(self.parse_record(raw_line, line)?);
        }

        debug!("Loaded {} opcode records ({} comment lines skipped)", records.len(), comments);
        Ok(records)
    }

    fn parse_record(&self, text: &str, line: usize) -> Result<OpcodeRecord, ParseError> {
        let fields: Vec<&str> = text.split(self.delimiter).map(str::trim).collect();
        if !self.layout.accepts(fields.len()) {
            return Err(ParseError::MalformedRecord {
                line,
                expected: self.layout.expected(),
                found: fields.len(),
            });
        }

        let opcode = parse_opcode_value(fields[0])
            .ok_or_else(|| ParseError::InvalidOpcodeValue { line, token: fields[0].to_string() })?;

        let name = fields[1];
        if !is_valid_identifier(name) {
            return Err(ParseError::InvalidOpcodeName { line, token: name.to_string() });
        }

        let register_arity = RegisterArity::from_token(fields[2])
            .ok_or_else(|| ParseError::UnknownRegisterArity { line, token: fields[2].to_string() })?;

        let sign_extension = SignExtension::from_token(fields[3])
            .ok_or_else(|| ParseError::UnknownSignExtension { line, token: fields[3].to_string() })?;

        let note = fields.get(4).filter(|note| !note.is_empty()).map(|note| note.to_string());

        Ok(OpcodeRecord {
            opcode,
            name: name.to_string(),
            register_arity,
            sign_extension,
            note,
            line,
        })
    }
}

/// Parse `source` with the default settings: `#` comments, `,` delimiter, 4 or 5 columns.
pub fn load(source: &str) -> Result<Vec<OpcodeRecord>, ParseError> {
    LoaderConfig::default().load(source)
}

/// Parse an opcode value literal: decimal, `0x` hexadecimal or `0b` binary
pub fn parse_opcode_value(token: &str) -> Option<u64> {
    let (digits, radix) = if let Some(hex) = token.strip_prefix("0x").or(token.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = token.strip_prefix("0b").or(token.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (token, 10)
    };
    // from_str_radix tolerates a leading '+'
    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opcode_value() {
        assert_eq!(parse_opcode_value("0"), Some(0));
        assert_eq!(parse_opcode_value("42"), Some(42));
        assert_eq!(parse_opcode_value("0x1F"), Some(31));
        assert_eq!(parse_opcode_value("0b1001111"), Some(0b1001111));
        assert_eq!(parse_opcode_value("-1"), None);
        assert_eq!(parse_opcode_value("+1"), None);
        assert_eq!(parse_opcode_value("0x"), None);
        assert_eq!(parse_opcode_value("ADD"), None);
        assert_eq!(parse_opcode_value(""), None);
    }

    #[test]
    fn test_load_both_layouts() {
        let source = "0,ADD,T,N,\n1,ADDI,O,Y\n";
        let records = load(source).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "ADD");
        assert_eq!(records[0].note, None);
        assert_eq!(records[1].name, "ADDI");
        assert_eq!(records[1].line, 2);
    }

    #[test]
    fn test_fixed_layout_rejects_other_width() {
        let compact = LoaderConfig::default().with_layout(RecordLayout::Compact);
        let err = compact.load("0,ADD,T,N,\n").unwrap_err();
        assert_eq!(err, ParseError::MalformedRecord { line: 1, expected: "4", found: 5 });

        let annotated = LoaderConfig::default().with_layout(RecordLayout::Annotated);
        let err = annotated.load("# header\n0,ADD,T,N\n").unwrap_err();
        assert_eq!(err, ParseError::MalformedRecord { line: 2, expected: "5", found: 4 });
    }

    #[test]
    fn test_fields_are_trimmed() {
        let records = load("  7 ,  SUB\t, T ,x , two-reg subtract \r\n").unwrap();
        let record = &records[0];
        assert_eq!(record.opcode, 7);
        assert_eq!(record.name, "SUB");
        assert_eq!(record.register_arity, RegisterArity::TwoOperandRegisters);
        assert_eq!(record.sign_extension, SignExtension::ZeroExtend);
        assert_eq!(record.note.as_deref(), Some("two-reg subtract"));
    }

    #[test]
    fn test_custom_delimiter_and_marker() {
        let config = LoaderConfig::default().with_delimiter(';').with_comment_marker('%');
        let records = config.load("% opcode;name;arity;sext\n3;J;Z;Y\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].opcode, 3);
        assert_eq!(records[0].line, 2);
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let records = load("\u{feff}# header\n0,NOP,Z,N,\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 2);

        let records = load("\u{feff}0x10,NOP,Z,N\n").unwrap();
        assert_eq!(records[0].opcode, 0x10);
        assert_eq!(records[0].name, "NOP");

        // Only at the start of the input
        assert_eq!(
            load("0,NOP,Z,N\n\u{feff}1,HALT,Z,N\n"),
            Err(ParseError::InvalidOpcodeValue { line: 2, token: "\u{feff}1".to_string() })
        );
    }
}
