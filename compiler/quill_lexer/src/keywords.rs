//! Reserved-word resolution.
//!
//! The scanner consumes a full identifier first and only then asks whether
//! the lexeme is reserved (maximal munch, so `ifx` stays an identifier).
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2-6 chars), then matches against the specific
//! keywords of that length.

/// Returns `true` if `text` is one of the fixed reserved words.
///
/// The set is compile-time fixed:
/// `if`, `else`, `while`, `for`, `return`, `int`, `string`, `bool`,
/// `class`, `void`.
#[inline]
pub(crate) fn is_keyword(text: &str) -> bool {
    // Guard: all keywords are 2-6 chars.
    if !(2..=6).contains(&text.len()) {
        return false;
    }

    match text.len() {
        2 => text == "if",
        3 => matches!(text, "for" | "int"),
        4 => matches!(text, "else" | "bool" | "void"),
        5 => matches!(text, "while" | "class"),
        6 => matches!(text, "return" | "string"),
        _ => false,
    }
}

#[cfg(test)]
mod tests;
