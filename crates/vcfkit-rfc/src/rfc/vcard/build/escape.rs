//! vCard text escaping.

/// Escapes a text value for use in a vCard property or structured component.
///
/// CRLF and lone CR are normalized to LF first. Then `\` becomes `\\`, `,`
/// becomes `\,`, `;` becomes `\;` and LF becomes `\n`.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 8);
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                result.push_str("\\n");
            }
            '\n' => result.push_str("\\n"),
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            _ => result.push(c),
        }
    }

    result
}
