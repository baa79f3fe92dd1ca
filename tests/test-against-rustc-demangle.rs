#![cfg(all(feature = "cpp_demangle", not(feature = "rustc-demangle")))]

use lang_demangle::{DemangleOutcome, Language};

const TEST_DATA: &str = include_str!("test-against-rustc-demangle-data.txt");

fn demangle_lang_demangle(name: &str) -> Option<String> {
    let mut buffer = String::new();

    (Language::Rust.demangle_name(name, &mut buffer) == DemangleOutcome::Success).then_some(buffer)
}

fn demangle_rustc_demangle(name: &str) -> Option<String> {
    let demangle = rustc_demangle::try_demangle(name).ok()?;

    Some(format!("{demangle:#}"))
}

#[test]
fn test_against_rustc_demangle() {
    for line in TEST_DATA.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            let lang_demangle_result = demangle_lang_demangle(line);
            let rustc_demangle_result = demangle_rustc_demangle(line);

            assert!(lang_demangle_result.is_some(), "Failed: {line}");
            assert_eq!(lang_demangle_result, rustc_demangle_result, "Failed: {line}");
        }
    }
}

#[test]
fn test_stricter_than_rustc_demangle() {
    // Symbols rustc-demangle accepts but the legacy decoder rejects: no hash, and escapes outside its table.
    for line in [
        "_ZN3foo3barE",
        "_ZN3foo8$u2c$bar17h0123456789abcdefE",
        "_ZN3foo6$u41$b17h0123456789abcdefE",
    ] {
        assert!(rustc_demangle::try_demangle(line).is_ok(), "Failed: {line}");
        assert_eq!(demangle_lang_demangle(line), None, "Failed: {line}");
    }
}

#[test]
fn test_u22_decodes_to_backslash() {
    assert_eq!(
        demangle_lang_demangle("_ZN3foo7a$u22$b17h0123456789abcdefE").as_deref(),
        Some("foo::a\\b")
    );
}
