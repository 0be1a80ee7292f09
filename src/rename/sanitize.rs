//! Description sanitization.
//!
//! Vision models return free text; only a conservative subset of it is safe
//! in a filename. Separator-ish characters become underscores, characters
//! that are invalid on common filesystems are dropped outright.

/// Maximum length of the sanitized description, in characters.
const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Sanitize a model description into a filename-safe token.
///
/// Whitespace and the separators `, ; : -` map to underscores, the
/// characters `< > : " / \ | ? *` are removed, underscore runs collapse to
/// one, leading/trailing underscores are trimmed, and the result is capped
/// at 100 characters. Returns an empty string when nothing usable remains.
pub fn sanitize_description(text: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            c if c.is_whitespace() => replaced.push('_'),
            ',' | ';' | ':' | '-' => replaced.push('_'),
            '<' | '>' | '"' | '/' | '\\' | '|' | '?' | '*' => {}
            c => replaced.push(c),
        }
    }

    let mut collapsed = String::with_capacity(replaced.len());
    let mut prev_underscore = false;
    for c in replaced.chars() {
        if c == '_' {
            if !prev_underscore {
                collapsed.push(c);
            }
            prev_underscore = true;
        } else {
            collapsed.push(c);
            prev_underscore = false;
        }
    }

    collapsed
        .trim_matches('_')
        .chars()
        .take(MAX_DESCRIPTION_LENGTH)
        .collect::<String>()
        // Truncation may cut right after an underscore
        .trim_end_matches('_')
        .to_string()
}
