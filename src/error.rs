use thiserror::Error;

/// The three ways a demangle operation can end.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DemangleOutcome {
    /// A decoded name was produced.
    Success,
    /// The input could not be decoded.
    Failure,
    /// Decoding is not available for this language on this build.
    Unsupported,
}

/// Why a mangled name could not be decoded.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DemangleError {
    /// Demangling is not applicable to the language, or the decoder it needs was not built in.
    #[error("demangling is not available")]
    Unsupported,
    /// The Itanium C++ ABI decoder rejected the input.
    #[error("invalid Itanium C++ ABI symbol: {0}")]
    Itanium(String),
    /// The dedicated Rust demangler rejected the input.
    #[error("invalid Rust symbol")]
    Rust,
    /// The Itanium-demangled name does not end with a `::h<16 hex digits>` hash.
    #[error("demangled name does not end with a legacy Rust hash")]
    MissingHash,
    /// An escape token between two `$` is not in the escape table.
    #[error("unknown escape sequence `${0}$`")]
    UnknownEscape(String),
    /// A `$` is not followed by a closing `$`.
    #[error("unterminated escape sequence")]
    UnterminatedEscape,
}

impl DemangleError {
    /// Maps the error onto the tri-state outcome reported by [`Language::demangle_name`](crate::Language::demangle_name).
    #[must_use]
    pub const fn outcome(&self) -> DemangleOutcome {
        match self {
            Self::Unsupported => DemangleOutcome::Unsupported,
            _ => DemangleOutcome::Failure,
        }
    }
}

/// Returned when a textual language tag names none of the supported languages.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown language: {0:?}")]
pub struct ParseLanguageError(pub String);
