//! Binding-line grammar: two double-quoted fields

/// Splits the remainder of a `\bind` directive into its two quoted
/// fields. Quotes cannot be escaped inside a field. Anything but
/// whitespace after the second field makes the line malformed.
pub(crate) fn bind_fields(rest: &str) -> Option<(&str, &str)> {
    let (key_spec, rest) = quoted_field(rest)?;
    let (command_spec, rest) = quoted_field(rest)?;
    if !rest.trim().is_empty() {
        return None;
    }
    Some((key_spec, command_spec))
}

fn quoted_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start().strip_prefix('"')?;
    let end = s.find('"')?;
    Some((&s[..end], &s[end + 1..]))
}
