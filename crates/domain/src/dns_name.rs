//! Name normalization shared by forward matching and reverse decoding.

/// Strips one trailing dot and lowercases ASCII letters.
///
/// `"Host1.Example.ts.net."` and `"host1.example.ts.net"` normalize to the
/// same value. Only a single trailing separator is removed.
pub fn normalize_name(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

/// The portion of `name` before its first dot, or the whole name.
pub fn first_label(name: &str) -> &str {
    match name.split_once('.') {
        Some((label, _)) => label,
        None => name,
    }
}

/// Appends a trailing dot unless one is already present.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
