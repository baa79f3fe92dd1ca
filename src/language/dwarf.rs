use super::Language;

const DW_LANG_JAVA: u16 = 0x000b;
const DW_LANG_RUST: u16 = 0x001c;
const DW_LANG_SWIFT: u16 = 0x001e;

// DWARF has no generic code for assembly language. This is the one the GNU toolchain emits.
const DW_LANG_MIPS_ASSEMBLER: u16 = 0x8001;

impl Language {
    /// Maps a DWARF `DW_AT_language` code to the language whose naming rules apply to it.
    ///
    /// C, Objective-C and every unrecognized code map to C++.
    ///
    /// ```rust
    /// use lang_demangle::Language;
    ///
    /// assert_eq!(Language::from_dwarf_language(0x001c), Language::Rust);
    /// assert_eq!(Language::from_dwarf_language(0x0002), Language::CPlusPlus);
    /// ```
    #[must_use]
    pub const fn from_dwarf_language(code: u16) -> Self {
        match code {
            DW_LANG_JAVA => Self::Java,
            DW_LANG_RUST => Self::Rust,
            DW_LANG_SWIFT => Self::Swift,
            DW_LANG_MIPS_ASSEMBLER => Self::Assembler,
            _ => Self::CPlusPlus,
        }
    }
}
