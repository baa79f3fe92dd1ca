//! # lang-demangle
//!
//! Language-aware demangling and qualified-name composition for symbols found in crash reports.
//!
//! Example:
//!
//! ```rust
//! use lang_demangle::{DemangleOutcome, Language};
//!
//! // Symbols are decoded according to the language that produced them.
//! let mut demangled = String::new();
//! let outcome = Language::Rust.demangle_name("_ZN4core3ptr13drop_in_place17h0123456789abcdefE", &mut demangled);
//!
//! assert_eq!(outcome, DemangleOutcome::Success);
//! assert_eq!(demangled, "core::ptr::drop_in_place");
//!
//! // Anything that cannot be decoded leaves the buffer empty.
//! assert_eq!(Language::Rust.demangle_name("_ZN3foo", &mut demangled), DemangleOutcome::Failure);
//! assert!(demangled.is_empty());
//!
//! // Renderers can fall back to the raw name.
//! assert_eq!(Language::Rust.demangle_or_original("_ZN3foo"), "_ZN3foo");
//!
//! // Nested entities are named with each language's own separator.
//! assert_eq!(Language::CPlusPlus.qualify(["std", "vector", "push_back"]), "std::vector::push_back");
//! assert_eq!(Language::Rust.qualify(["alloc", "vec", "Vec"]), "alloc.vec.Vec");
//! ```
//!
//! The example above assumes the default `cpp_demangle` feature. Without it, C++ and legacy Rust symbols report
//! [`DemangleOutcome::Unsupported`]. With the `rustc-demangle` feature, Rust symbols are decoded by the
//! `rustc-demangle` crate instead of the built-in legacy decoder.

mod error;
pub mod itanium;
mod language;
pub mod rust_legacy;

pub use self::error::{DemangleError, DemangleOutcome, ParseLanguageError};
pub use self::language::{Language, LanguageDescriptor, Scoping, compose_qualified_name};

/// Builds shared decoder state up front.
///
/// Construction is synchronized, so calling this is optional. It moves the one-time cost to start-up, before any
/// crash handler runs.
pub fn initialize() {
    rust_legacy::initialize();
}
