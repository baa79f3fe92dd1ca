use crate::error::DemangleError;

/// Escape tokens recognized between two `$` in a legacy Rust identifier, with the characters they stand for.
///
/// Tokens outside this table fail the decode.
pub const ESCAPES: [(&str, char); 18] = [
    ("C", ','),
    ("SP", '@'),
    ("BP", '*'),
    ("RF", '&'),
    ("LT", '<'),
    ("GT", '>'),
    ("LP", '('),
    ("RP", ')'),
    ("u20", ' '),
    ("u22", '\\'),
    ("u27", '\''),
    ("u2b", '+'),
    ("u3b", ';'),
    ("u5b", '['),
    ("u5d", ']'),
    ("u7b", '{'),
    ("u7d", '}'),
    ("u7e", '~'),
];

/// Looks up an escape token, without its `$` delimiters.
#[must_use]
pub fn lookup(token: &str) -> Option<char> {
    ESCAPES
        .iter()
        .find_map(|&(key, value)| (key == token).then_some(value))
}

/// Replaces every `$token$` in `path` by the character it stands for.
///
/// Characters outside escapes, underscores included, are copied unchanged.
pub fn decode(path: &str) -> Result<String, DemangleError> {
    let mut decoded = String::with_capacity(path.len());
    let mut rest = path;

    while let Some((literal, escaped)) = rest.split_once('$') {
        decoded.push_str(literal);

        let (token, tail) = escaped.split_once('$').ok_or(DemangleError::UnterminatedEscape)?;
        let value = lookup(token).ok_or_else(|| DemangleError::UnknownEscape(token.to_owned()))?;

        decoded.push(value);
        rest = tail;
    }

    decoded.push_str(rest);

    Ok(decoded)
}
