//! Per-opcode attributes as they appear in an ISA specification row.
//!
//! Each row of the specification describes one opcode:
//!
//! ```text
//! opcode , name , arity , sext [, note]
//!   12   , ADD  ,   T   ,  N   ,
//!   13   , ADDi ,   O   ,  Y   , add immediate
//! ```
//!
//! - `arity` is the number of register operands: `Z` (zero), `O` (one), `T` (two).
//! - `sext` is how the immediate field is widened: `Y` (sign-extend), `N` (zero-extend).
//!   The legacy token `x` is accepted and means zero-extend.
use serde::Serialize;
use std::fmt;

/// Number of register operands an instruction encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegisterArity {
    /// No register fields, the whole payload is immediate
    ZeroOperandRegisters,
    /// One register field followed by a 16-bit immediate
    OneOperandRegister,
    /// Two register fields followed by a 6-bit immediate
    TwoOperandRegisters,
}

impl RegisterArity {
    /// Parse a specification token (`Z`, `O` or `T`)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Z" => Some(RegisterArity::ZeroOperandRegisters),
            "O" => Some(RegisterArity::OneOperandRegister),
            "T" => Some(RegisterArity::TwoOperandRegisters),
            _ => None,
        }
    }

    /// Canonical single-letter token
    pub const fn token(&self) -> char {
        match self {
            RegisterArity::ZeroOperandRegisters => 'Z',
            RegisterArity::OneOperandRegister => 'O',
            RegisterArity::TwoOperandRegisters => 'T',
        }
    }

    /// Number of register fields the decoder must extract
    pub const fn count(&self) -> usize {
        match self {
            RegisterArity::ZeroOperandRegisters => 0,
            RegisterArity::OneOperandRegister => 1,
            RegisterArity::TwoOperandRegisters => 2,
        }
    }

    /// Width in bits of the immediate field that remains in a 32-bit
    /// instruction word once the register fields are taken out.
    pub const fn immediate_width(&self) -> u32 {
        match self {
            RegisterArity::ZeroOperandRegisters => 26,
            RegisterArity::OneOperandRegister => 16,
            RegisterArity::TwoOperandRegisters => 6,
        }
    }
}

impl fmt::Display for RegisterArity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterArity::ZeroOperandRegisters => write!(f, "ZeroReg"),
            RegisterArity::OneOperandRegister => write!(f, "OneReg"),
            RegisterArity::TwoOperandRegisters => write!(f, "TwoReg"),
        }
    }
}

/// How an immediate field is widened to 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignExtension {
    SignExtend,
    ZeroExtend,
}

impl SignExtension {
    /// Parse a specification token.
    ///
    /// `x` is an old spelling of `N` and normalizes to [`SignExtension::ZeroExtend`].
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Y" => Some(SignExtension::SignExtend),
            "N" | "x" => Some(SignExtension::ZeroExtend),
            _ => None,
        }
    }

    /// Canonical single-letter token (`Y` or `N`)
    pub const fn token(&self) -> char {
        match self {
            SignExtension::SignExtend => 'Y',
            SignExtension::ZeroExtend => 'N',
        }
    }

    pub const fn is_signed(&self) -> bool {
        matches!(self, SignExtension::SignExtend)
    }

    /// Truncate `value` to its low `width` bits and widen it to 64 bits.
    ///
    /// With [`SignExtension::SignExtend`], bit `width - 1` is replicated into every
    /// upper bit. A width of 0 yields 0 and a width of 64 or more returns `value` as is.
    pub const fn extend(&self, value: u64, width: u32) -> u64 {
        if width == 0 {
            return 0;
        }
        if width >= u64::BITS {
            return value;
        }
        let mask = (1u64 << width) - 1;
        let truncated = value & mask;
        match self {
            SignExtension::SignExtend if truncated & (1u64 << (width - 1)) != 0 => {
                truncated | !mask
            }
            _ => truncated,
        }
    }
}

impl fmt::Display for SignExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignExtension::SignExtend => write!(f, "sign-extend"),
            SignExtension::ZeroExtend => write!(f, "zero-extend"),
        }
    }
}

/// Decode-relevant attributes of a single opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeInfo {
    pub register_arity: RegisterArity,
    pub sign_extension: SignExtension,
}

impl DecodeInfo {
    pub const fn new(register_arity: RegisterArity, sign_extension: SignExtension) -> Self {
        Self { register_arity, sign_extension }
    }

    /// Widen a raw immediate taken from an instruction of this shape
    pub const fn extend_immediate(&self, raw: u64) -> u64 {
        self.sign_extension.extend(raw, self.register_arity.immediate_width())
    }

    /// Two-letter code used by the Onikiri simulator (`ZS`, `OU`, ...)
    pub fn onikiri_code(&self) -> String {
        let sext = if self.sign_extension.is_signed() { 'S' } else { 'U' };
        format!("{}{}", self.register_arity.token(), sext)
    }
}

impl From<DecodeInfo> for (RegisterArity, SignExtension) {
    fn from(info: DecodeInfo) -> Self {
        (info.register_arity, info.sign_extension)
    }
}

impl fmt::Display for DecodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.register_arity, self.sign_extension)
    }
}

/// Position of an opcode in the specification, counting only data rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Ordinal(pub u32);

impl Ordinal {
    pub const fn new(ordinal: u32) -> Self {
        Ordinal(ordinal)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl PartialEq<usize> for Ordinal {
    fn eq(&self, other: &usize) -> bool {
        self.as_usize() == *other
    }
}

impl From<Ordinal> for usize {
    fn from(ordinal: Ordinal) -> Self {
        ordinal.as_usize()
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One data row of the specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeRecord {
    /// Raw encoding identifier
    pub opcode: u64,
    /// Identifier used for the enumeration member
    pub name: String,
    pub register_arity: RegisterArity,
    pub sign_extension: SignExtension,
    /// Free-form fifth column, never used for decoding
    pub note: Option<String>,
    /// 1-based line in the specification source
    pub line: usize,
}

impl OpcodeRecord {
    pub fn decode_info(&self) -> DecodeInfo {
        DecodeInfo::new(self.register_arity, self.sign_extension)
    }
}

/// Returns true if `name` can be used as an enumeration member in the generated code:
/// ASCII letters, digits and `_`, not starting with a digit.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_zero_extension_token() {
        assert_eq!(SignExtension::from_token("x"), Some(SignExtension::ZeroExtend));
        assert_eq!(SignExtension::from_token("x"), SignExtension::from_token("N"));
        assert_eq!(SignExtension::from_token("y"), None);
        assert_eq!(SignExtension::from_token("S"), None);
    }

    #[test]
    fn test_register_arity_tokens() {
        for arity in [
            RegisterArity::ZeroOperandRegisters,
            RegisterArity::OneOperandRegister,
            RegisterArity::TwoOperandRegisters,
        ] {
            let token = arity.token().to_string();
            assert_eq!(RegisterArity::from_token(&token), Some(arity));
        }
        assert_eq!(RegisterArity::from_token("t"), None);
        assert_eq!(RegisterArity::from_token(""), None);
    }

    #[test]
    fn test_sign_extend_immediates() {
        let sext = SignExtension::SignExtend;
        let zext = SignExtension::ZeroExtend;

        // -1 in 16 bits
        assert_eq!(sext.extend(0xFFFF, 16), u64::MAX);
        assert_eq!(zext.extend(0xFFFF, 16), 0xFFFF);

        // Positive values are untouched either way
        assert_eq!(sext.extend(0x7FFF, 16), 0x7FFF);
        assert_eq!(zext.extend(0x7FFF, 16), 0x7FFF);

        // Bits above the width are discarded before widening
        assert_eq!(zext.extend(0x1_0005, 16), 5);
        assert_eq!(sext.extend(0xABCD_0020, 6), 0xFFFF_FFFF_FFFF_FFE0);

        assert_eq!(sext.extend(0x1234, 0), 0);
        assert_eq!(sext.extend(0x8000_0000_0000_0000, 64), 0x8000_0000_0000_0000);
    }

    #[test]
    fn test_decode_info_immediate_width() {
        let jal = DecodeInfo::new(RegisterArity::ZeroOperandRegisters, SignExtension::SignExtend);
        // 26-bit immediate with the top bit set
        assert_eq!(jal.extend_immediate(1 << 25), 0xFFFF_FFFF_FE00_0000);

        let st = DecodeInfo::new(RegisterArity::TwoOperandRegisters, SignExtension::SignExtend);
        assert_eq!(st.extend_immediate(0b10_0000), (-32i64) as u64);

        let andi = DecodeInfo::new(RegisterArity::OneOperandRegister, SignExtension::ZeroExtend);
        assert_eq!(andi.extend_immediate(0xFFFF), 0xFFFF);
    }

    #[test]
    fn test_onikiri_code() {
        let info = DecodeInfo::new(RegisterArity::ZeroOperandRegisters, SignExtension::SignExtend);
        assert_eq!(info.onikiri_code(), "ZS");
        let info = DecodeInfo::new(RegisterArity::OneOperandRegister, SignExtension::ZeroExtend);
        assert_eq!(info.onikiri_code(), "OU");
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("ADD"));
        assert!(is_valid_identifier("SEXT16TO32"));
        assert!(is_valid_identifier("_MAX"));
        assert!(!is_valid_identifier("8BIT"));
        assert!(!is_valid_identifier("ADD I"));
        assert!(!is_valid_identifier("ADD.I"));
        assert!(!is_valid_identifier(""));
    }
}
