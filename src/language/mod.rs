use crate::error::{DemangleError, DemangleOutcome, ParseLanguageError};
use crate::itanium;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

mod dwarf;


/// Joins `parent` and `name` with `separator`.
///
/// An empty `parent` means there is no enclosing scope, so `name` is returned as is.
#[must_use]
pub fn compose_qualified_name(parent: &str, separator: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        let mut result = String::with_capacity(parent.len() + separator.len() + name.len());

        result.push_str(parent);
        result.push_str(separator);
        result.push_str(name);

        result
    }
}

/// How a language nests names inside enclosing scopes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scoping {
    /// Scopes are joined with the given separator.
    Separator(&'static str),
    /// Names live in a single flat namespace; enclosing scopes are dropped.
    Flat,
}

/// The fixed properties and strategies of one language.
#[derive(Debug)]
pub struct LanguageDescriptor {
    name: &'static str,
    scoping: Scoping,
    has_functions: bool,
    demangle: fn(&str) -> Result<String, DemangleError>,
}

impl LanguageDescriptor {
    /// Human-readable language name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// How qualified names are built.
    #[must_use]
    pub const fn scoping(&self) -> Scoping {
        self.scoping
    }

    /// Whether the language has functions.
    #[must_use]
    pub const fn has_functions(&self) -> bool {
        self.has_functions
    }
}

fn demangle_swift(mangled: &str) -> Result<String, DemangleError> {
    // No embeddable Swift decoder exists. The mangled form carries more than a composed qualified name would, and
    // `swift-demangle` can decode it later.
    Ok(mangled.to_owned())
}

const fn not_applicable(_mangled: &str) -> Result<String, DemangleError> {
    Err(DemangleError::Unsupported)
}

#[cfg(feature = "rustc-demangle")]
fn demangle_rust(mangled: &str) -> Result<String, DemangleError> {
    let demangled = rustc_demangle::try_demangle(mangled).map_err(|_| DemangleError::Rust)?;
    let demangled = format!("{demangled:#}");

    if demangled.is_empty() {
        Err(DemangleError::Rust)
    } else {
        Ok(demangled)
    }
}

#[cfg(not(feature = "rustc-demangle"))]
fn demangle_rust(mangled: &str) -> Result<String, DemangleError> {
    crate::rust_legacy::demangle(mangled)
}

static CPLUS_PLUS: LanguageDescriptor = LanguageDescriptor {
    name: "C++",
    scoping: Scoping::Separator("::"),
    has_functions: true,
    demangle: itanium::demangle,
};

static JAVA: LanguageDescriptor = LanguageDescriptor {
    name: "Java",
    scoping: Scoping::Separator("."),
    has_functions: true,
    demangle: not_applicable,
};

static SWIFT: LanguageDescriptor = LanguageDescriptor {
    name: "Swift",
    scoping: Scoping::Separator("."),
    has_functions: true,
    demangle: demangle_swift,
};

static RUST: LanguageDescriptor = LanguageDescriptor {
    name: "Rust",
    scoping: Scoping::Separator("."),
    has_functions: true,
    demangle: demangle_rust,
};

static ASSEMBLER: LanguageDescriptor = LanguageDescriptor {
    name: "Assembler",
    scoping: Scoping::Flat,
    has_functions: false,
    demangle: not_applicable,
};

/// A source language that symbols can come from.
///
/// ```rust
/// use lang_demangle::{DemangleOutcome, Language};
///
/// assert_eq!(Language::CPlusPlus.make_qualified_name("std", "vector"), "std::vector");
/// assert_eq!(Language::Java.qualify(["java", "lang", "String"]), "java.lang.String");
/// assert_eq!(Language::Assembler.make_qualified_name("section", "start"), "start");
///
/// let mut demangled = String::new();
///
/// assert_eq!(Language::Swift.demangle_name("$s4main3fooyyF", &mut demangled), DemangleOutcome::Success);
/// assert_eq!(demangled, "$s4main3fooyyF");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Language {
    /// C++, also used for C and Objective-C.
    CPlusPlus,
    /// Java.
    Java,
    /// Swift.
    Swift,
    /// Rust.
    Rust,
    /// Assembly language.
    Assembler,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 5] = [Self::CPlusPlus, Self::Java, Self::Swift, Self::Rust, Self::Assembler];

    /// Returns the descriptor holding this language's properties.
    #[must_use]
    pub const fn descriptor(self) -> &'static LanguageDescriptor {
        match self {
            Self::CPlusPlus => &CPLUS_PLUS,
            Self::Java => &JAVA,
            Self::Swift => &SWIFT,
            Self::Rust => &RUST,
            Self::Assembler => &ASSEMBLER,
        }
    }

    /// Returns the scope separator, or `None` for languages without nested scopes.
    #[must_use]
    pub const fn separator(self) -> Option<&'static str> {
        match self.descriptor().scoping {
            Scoping::Separator(separator) => Some(separator),
            Scoping::Flat => None,
        }
    }

    /// Whether the language has functions. Only assembler does not.
    #[must_use]
    pub const fn has_functions(self) -> bool {
        self.descriptor().has_functions
    }

    /// Names `name` inside the scope `parent`, which is empty at the top level.
    #[must_use]
    pub fn make_qualified_name(self, parent: &str, name: &str) -> String {
        match self.descriptor().scoping {
            Scoping::Separator(separator) => compose_qualified_name(parent, separator, name),
            Scoping::Flat => name.to_owned(),
        }
    }

    /// Composes a whole scope chain, outermost first.
    #[must_use]
    pub fn qualify<'a>(self, scopes: impl IntoIterator<Item = &'a str>) -> String {
        scopes
            .into_iter()
            .fold(String::new(), |parent, name| self.make_qualified_name(&parent, name))
    }

    /// Demangles `mangled`, returning the decoded name or the reason it could not be decoded.
    ///
    /// # Errors
    ///
    /// Returns [`DemangleError::Unsupported`] when demangling is not available for this language on this build, and
    /// another variant when the input is rejected.
    pub fn demangle(self, mangled: &str) -> Result<String, DemangleError> {
        (self.descriptor().demangle)(mangled)
    }

    /// Demangles `mangled` into `demangled`.
    ///
    /// `demangled` holds the decoded name on [`DemangleOutcome::Success`] and is empty otherwise.
    pub fn demangle_name(self, mangled: &str, demangled: &mut String) -> DemangleOutcome {
        self.store(mangled, self.demangle(mangled), demangled)
    }

    /// Demangles `mangled`, falling back to `mangled` itself when it cannot be decoded.
    #[must_use]
    pub fn demangle_or_original(self, mangled: &str) -> Cow<'_, str> {
        self.demangle(mangled).map_or(Cow::Borrowed(mangled), Cow::Owned)
    }

    fn store(self, mangled: &str, result: Result<String, DemangleError>, demangled: &mut String) -> DemangleOutcome {
        demangled.clear();

        match result {
            Ok(name) => {
                *demangled = name;

                DemangleOutcome::Success
            }
            Err(error) => {
                if error == DemangleError::Unsupported {
                    log::trace!("not demangling {self} symbol {mangled:?}: {error}");
                } else {
                    log::debug!("failed to demangle {self} symbol {mangled:?}: {error}");
                }

                error.outcome()
            }
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "c++" | "cpp" | "cplusplus" => Self::CPlusPlus,
            "java" => Self::Java,
            "swift" => Self::Swift,
            "rust" => Self::Rust,
            "asm" | "assembler" => Self::Assembler,
            _ => return Err(ParseLanguageError(s.to_owned())),
        })
    }
}
