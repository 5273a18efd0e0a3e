use std::error;
use std::fmt;

/// Why a value was rejected by one of the `check_*` functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Both grammars require at least one byte (`""` counts for cookies).
    Empty,

    /// The first byte outside the allowed character class.
    ///
    /// `offset` is relative to the start of the whole input, so it
    /// accounts for a leading DQUOTE in cookie values.
    InvalidByte { byte: u8, offset: usize },

    /// A cookie value starts with DQUOTE but does not end with one.
    UnterminatedQuote,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => f.write_str("empty value"),
            Error::InvalidByte { byte, offset } =>
                write!(f, "invalid byte 0x{:02x} at offset {}", byte, offset),
            Error::UnterminatedQuote => f.write_str("unterminated quoted value"),
        }
    }
}

impl error::Error for Error {}
