//! Decoding of the legacy Rust mangling scheme.
//!
//! Legacy Rust symbols are Itanium C++ ABI nested names whose identifiers may contain `$`-delimited escapes, with a
//! final `h<16 hex digits>` segment holding a disambiguating hash. For example
//! `_ZN4core3ptr13drop_in_place17h0123456789abcdefE` is first decoded by the Itanium decoder into
//! `core::ptr::drop_in_place::h0123456789abcdef`, from which the escapes are rewritten and the hash is split off.

use crate::error::DemangleError;
use crate::itanium;
use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

pub mod escape;


static HASHED_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_.:$]+)::h([a-f0-9]{16})$").expect("legacy symbol pattern should compile")
});

/// Builds the shared pattern matcher now instead of on first use.
pub fn initialize() {
    LazyLock::force(&HASHED_PATH);
}

/// A legacy Rust symbol after Itanium decoding.
///
/// The default display style includes the hash; the alternate style (`{:#}`) omits it.
///
/// ```rust
/// use lang_demangle::rust_legacy::Symbol;
///
/// let symbol = Symbol::parse_from_str("alloc::vec::Vec$LT$u8$GT$::push::h0123456789abcdef").unwrap();
///
/// assert_eq!(symbol.path, "alloc::vec::Vec<u8>::push");
/// assert_eq!(symbol.hash, 0x0123_4567_89ab_cdef);
/// assert_eq!(format!("{symbol:#}"), "alloc::vec::Vec<u8>::push");
/// assert_eq!(format!("{symbol}"), "alloc::vec::Vec<u8>::push::h0123456789abcdef");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    /// The decoded path, without the hash segment.
    pub path: String,
    /// The disambiguating hash.
    pub hash: u64,
}

impl Symbol {
    /// Parses an Itanium-demangled legacy Rust name such as `std::rt::lang_start::h0123456789abcdef`.
    ///
    /// # Errors
    ///
    /// Fails if the name does not end with a 16 digit lowercase hash, or if an escape is unknown or unterminated.
    pub fn parse_from_str(demangled: &str) -> Result<Self, DemangleError> {
        let (_, [path, hash]) = HASHED_PATH
            .captures(demangled)
            .ok_or(DemangleError::MissingHash)?
            .extract();

        let hash = u64::from_str_radix(hash, 16).map_err(|_| DemangleError::MissingHash)?;

        Ok(Self {
            path: escape::decode(path)?,
            hash,
        })
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.path)?;

        if f.alternate() {
            Ok(())
        } else {
            write!(f, "::h{:016x}", self.hash)
        }
    }
}

/// Demangles a legacy Rust symbol through the Itanium decoder, dropping the hash.
///
/// # Errors
///
/// Returns [`DemangleError::Unsupported`] if this build has no Itanium decoder, and other errors if any decoding
/// step rejects the input.
pub fn demangle(mangled: &str) -> Result<String, DemangleError> {
    let intermediate = itanium::demangle(mangled)?;

    Symbol::parse_from_str(&intermediate).map(|symbol| symbol.path)
}
