//! Escape processing for raw template text.

use std::iter::Peekable;
use std::str::Chars;

/// Converts raw fragment text into its cooked form.
///
/// Returns `None` when the raw text contains an invalid escape sequence.
/// Tagged templates keep such fragments (the raw text is still available),
/// but plain interpolation cannot render them.
///
/// Recognized escapes: `\n \r \t \b \f \v`, `\0` not followed by a digit,
/// `\xHH`, `\uHHHH`, `\u{H...}`, and a backslash before a line terminator
/// (line continuation, produces nothing). Any other character after a
/// backslash stands for itself, except digits `1`-`9`, which are invalid.
#[must_use]
pub fn cook(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            '0' => {
                if chars.peek().is_some_and(char::is_ascii_digit) {
                    return None;
                }
                out.push('\0');
            }
            '1'..='9' => return None,
            'x' => out.push(hex_escape(&mut chars, 2)?),
            'u' => out.push(unicode_escape(&mut chars)?),
            // line continuation
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            other => out.push(other),
        }
    }
    Some(out)
}

/// Reads exactly `digits` hex digits as a scalar value.
fn hex_escape(chars: &mut Peekable<Chars<'_>>, digits: usize) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}

/// Reads `HHHH` or `{H...}` after `\u`.
fn unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    if chars.peek() != Some(&'{') {
        return hex_escape(chars, 4);
    }
    chars.next();
    let mut code = 0u32;
    let mut seen = 0;
    loop {
        let c = chars.next()?;
        if c == '}' {
            break;
        }
        code = code.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
        if code > 0x10_FFFF {
            return None;
        }
        seen += 1;
    }
    if seen == 0 {
        return None;
    }
    // Surrogates are rejected by from_u32
    char::from_u32(code)
}
