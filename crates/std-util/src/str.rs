/// Converts an ASCII identifier to snake case.
///
/// Every uppercase ASCII letter is lowercased and, unless it is the first
/// byte, preceded by `_`. All other bytes are copied unchanged. Runs of
/// capitals are not treated as acronyms: `HTTPCode` becomes `h_t_t_p_code`.
/// Existing schemas depend on this exact output.
pub fn snake_case(name: &str) -> String {
    let mut ret = String::with_capacity(name.len() + 1);

    for (i, ch) in name.char_indices() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                ret.push('_');
            }
            ret.push(ch.to_ascii_lowercase());
        } else {
            ret.push(ch);
        }
    }

    ret
}

/// Returns `true` if `name` can be emitted as an unquoted SQL identifier:
/// a leading ASCII letter or `_`, followed by ASCII letters, digits or `_`.
pub fn is_bare_ident(name: &str) -> bool {
    let mut bytes = name.bytes();

    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }

    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
