//! Builders for mangled names used by tests and fuzz targets.

/// Encodes `segments` as an Itanium C++ ABI nested name: `_ZN`, each segment prefixed by its length, then `E`.
pub fn mangle_nested<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut mangled = String::from("_ZN");

    push_source_names(&mut mangled, segments);
    mangled.push('E');

    mangled
}

/// Encodes a legacy Rust symbol: the path segments as a nested name, followed by an `h<16 hex digits>` segment.
pub fn mangle_legacy<'a>(path: impl IntoIterator<Item = &'a str>, hash: u64) -> String {
    let mut mangled = String::from("_ZN");

    push_source_names(&mut mangled, path);
    push_source_name(&mut mangled, &format!("h{hash:016x}"));
    mangled.push('E');

    mangled
}

fn push_source_names<'a>(target: &mut String, identifiers: impl IntoIterator<Item = &'a str>) {
    for identifier in identifiers {
        push_source_name(target, identifier);
    }
}

fn push_source_name(target: &mut String, identifier: &str) {
    target.push_str(&identifier.len().to_string());
    target.push_str(identifier);
}
