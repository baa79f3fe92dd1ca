//! Itanium C++ ABI decoding, selected at build time.
//!
//! With the `cpp_demangle` feature the decoder is the `cpp_demangle` crate. Without it every call reports
//! [`DemangleError::Unsupported`].

use crate::error::DemangleError;

/// Decodes an Itanium C++ ABI mangled name.
#[cfg(feature = "cpp_demangle")]
pub fn demangle(mangled: &str) -> Result<String, DemangleError> {
    use cpp_demangle::{DemangleOptions, Symbol};

    let symbol = Symbol::new(mangled).map_err(|error| DemangleError::Itanium(error.to_string()))?;

    // Formatting can still fail on a parsed but semantically broken symbol, so avoid `Display`.
    symbol
        .demangle(&DemangleOptions::default())
        .map_err(|_| DemangleError::Itanium(String::from("unprintable symbol")))
}

/// Decodes an Itanium C++ ABI mangled name.
#[cfg(not(feature = "cpp_demangle"))]
pub const fn demangle(_mangled: &str) -> Result<String, DemangleError> {
    Err(DemangleError::Unsupported)
}

/// Returns whether this build carries an Itanium decoder.
#[must_use]
pub const fn is_available() -> bool {
    cfg!(feature = "cpp_demangle")
}
