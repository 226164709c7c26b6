//! Character classes used by the scanner

/// Whitespace skipped between tokens.
///
/// Matches the classic regular-expression `\s` class: Unicode `White_Space`
/// minus NEL (U+0085), plus the byte order mark (U+FEFF).
#[inline(always)]
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        c => c.is_whitespace(),
    }
}

/// ASCII decimal digit (`\d`)
#[inline(always)]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ASCII word character (`\w`): letters, digits and underscore
#[inline(always)]
pub fn is_word(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '_')
}

/// Default symbol class: word characters and `$`
#[inline(always)]
pub fn is_symbol_char(c: char) -> bool {
    is_word(c) || c == '$'
}

/// Symbol class of `_filter` expressions: anything except whitespace, `]` and `)`
#[inline(always)]
pub fn is_filter_symbol_char(c: char) -> bool {
    !is_whitespace(c) && c != ']' && c != ')'
}
